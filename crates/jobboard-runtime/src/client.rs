use jobboard_providers::{JsonFileSource, PostingSource};
use jobboard_types::{Posting, PostingId};
use std::sync::Arc;

use crate::config::Config;
use crate::detail::DetailOutcome;
use crate::error::{Error, Result};
use crate::feed::{FeedSubscription, PostingFeed};
use crate::notifier::Notifier;
use crate::view::PostingListView;

/// Facade wiring a posting source, its list feed, a notifier and the list
/// view together.
///
/// `JobBoard` owns the view state; hosts drive it through `refresh`,
/// `open_detail` and `view_mut` and read it back through `view`.
pub struct JobBoard {
    source: Arc<dyn PostingSource>,
    feed: PostingFeed,
    subscription: FeedSubscription,
    notifier: Arc<dyn Notifier>,
    view: PostingListView,
}

impl JobBoard {
    pub fn new(source: Arc<dyn PostingSource>, notifier: Arc<dyn Notifier>) -> Self {
        let feed = PostingFeed::new(source.clone());
        let subscription = feed.subscribe();
        Self {
            source,
            feed,
            subscription,
            notifier,
            view: PostingListView::new(),
        }
    }

    /// Build a board reading from the configured JSON file
    pub fn from_config(config: &Config, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let path = config.source_path()?;
        tracing::debug!(path = %path.display(), "opening posting source");

        let source: Arc<dyn PostingSource> = Arc::new(JsonFileSource::new(path));
        let mut board = Self::new(source, notifier);
        board.view = PostingListView::new().with_sort(config.view.sort_state());
        Ok(board)
    }

    /// Fire the list feed and apply every pending event to the view.
    ///
    /// A failed fetch is reported to the notifier and returned, but the view
    /// keeps whatever it showed before.
    pub async fn refresh(&mut self) -> Result<()> {
        self.feed.refresh().await;
        self.apply_pending()
    }

    /// Apply feed events that arrived since the last call. Returns the error
    /// of the last failing event, if any.
    pub fn apply_pending(&mut self) -> Result<()> {
        let mut last = Ok(());
        while let Some(event) = self.subscription.try_next() {
            last = self.view.on_list_event(event, self.notifier.as_ref());
        }
        last
    }

    /// Fetch one posting and open the detail view with it
    pub async fn open_detail(&mut self, id: &PostingId) -> Result<&Posting> {
        let ticket = self.view.begin_detail(id.clone());
        let result = self.source.get_detail(id).await;

        match self
            .view
            .complete_detail(ticket, result, self.notifier.as_ref())?
        {
            DetailOutcome::Opened => self.view.selected().ok_or_else(|| {
                Error::InvalidOperation("detail view closed unexpectedly".to_string())
            }),
            DetailOutcome::Superseded => Err(Error::InvalidOperation(format!(
                "detail request for {} was superseded",
                id
            ))),
        }
    }

    pub fn view(&self) -> &PostingListView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut PostingListView {
        &mut self.view
    }

    pub fn source(&self) -> Arc<dyn PostingSource> {
        self.source.clone()
    }

    pub fn notifier(&self) -> Arc<dyn Notifier> {
        self.notifier.clone()
    }

    pub fn feed(&self) -> &PostingFeed {
        &self.feed
    }
}
