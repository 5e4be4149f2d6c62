use futures::stream::Stream;
use jobboard_providers::PostingSource;
use jobboard_types::Posting;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A "list changed" notification
#[derive(Debug, Clone)]
pub enum ListEvent {
    Loaded(Vec<Posting>),
    Failed(Arc<jobboard_providers::Error>),
}

impl ListEvent {
    pub fn is_failure(&self) -> bool {
        matches!(self, ListEvent::Failed(_))
    }
}

/// Push-based list feed over a posting source.
///
/// Subscribers receive one event per `refresh`. The feed fires zero or more
/// times over a subscriber's lifetime; each event carries the complete list
/// so handlers can replace their state rather than merge.
pub struct PostingFeed {
    source: Arc<dyn PostingSource>,
    subscribers: Mutex<Vec<UnboundedSender<ListEvent>>>,
}

impl PostingFeed {
    pub fn new(source: Arc<dyn PostingSource>) -> Self {
        Self {
            source,
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub fn subscribe(&self) -> FeedSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().unwrap().push(tx);
        FeedSubscription { receiver: rx }
    }

    /// Fetch the list once and publish the outcome to every live subscriber.
    /// Returns the number of subscribers reached.
    pub async fn refresh(&self) -> usize {
        let event = match self.source.list_postings().await {
            Ok(postings) => ListEvent::Loaded(postings),
            Err(err) => ListEvent::Failed(Arc::new(err)),
        };
        tracing::debug!(
            source = self.source.id(),
            failed = event.is_failure(),
            "list feed fired"
        );
        self.publish(event)
    }

    /// Deliver an event to all subscribers, dropping the ones that went away
    pub fn publish(&self, event: ListEvent) -> usize {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }
}

pub struct FeedSubscription {
    receiver: UnboundedReceiver<ListEvent>,
}

impl FeedSubscription {
    /// Poll for the next event (non-blocking).
    ///
    /// Returns `None` if no event is available immediately.
    pub fn try_next(&mut self) -> Option<ListEvent> {
        self.receiver.try_recv().ok()
    }

    /// Wait for the next event; `None` once the feed is gone
    pub async fn recv(&mut self) -> Option<ListEvent> {
        self.receiver.recv().await
    }
}

impl Stream for FeedSubscription {
    type Item = ListEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use jobboard_providers::MemorySource;

    #[tokio::test]
    async fn test_refresh_reaches_every_subscriber() {
        let source = Arc::new(MemorySource::new(vec![Posting::new("1")]));
        let feed = PostingFeed::new(source);
        let mut a = feed.subscribe();
        let mut b = feed.subscribe();

        assert_eq!(feed.refresh().await, 2);

        assert!(matches!(a.try_next(), Some(ListEvent::Loaded(ref p)) if p.len() == 1));
        assert!(matches!(b.next().await, Some(ListEvent::Loaded(_))));
    }

    #[tokio::test]
    async fn test_failure_is_published() {
        let source = Arc::new(MemorySource::new(vec![]));
        source.fail_list(true);
        let feed = PostingFeed::new(source);
        let mut sub = feed.subscribe();

        feed.refresh().await;
        assert!(sub.try_next().is_some_and(|e| e.is_failure()));
    }

    #[tokio::test]
    async fn test_dropped_subscribers_are_pruned() {
        let source = Arc::new(MemorySource::new(vec![]));
        let feed = PostingFeed::new(source);
        let kept = feed.subscribe();
        drop(feed.subscribe());

        assert_eq!(feed.refresh().await, 1);
        assert_eq!(feed.subscriber_count(), 1);
        drop(kept);
    }

    #[tokio::test]
    async fn test_no_event_before_refresh() {
        let source = Arc::new(MemorySource::new(vec![Posting::new("1")]));
        let feed = PostingFeed::new(source);
        let mut sub = feed.subscribe();
        assert!(sub.try_next().is_none());
    }
}
