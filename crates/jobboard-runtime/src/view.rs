use jobboard_engine::{IngestedList, apply_filters, apply_sort, ingest};
use jobboard_types::{
    FacetOption, FilterState, Posting, PostingId, PostingRow, SortDirection, SortField, SortState,
    VIEW_DETAILS_ACTION,
};

use crate::detail::{DetailModal, DetailOutcome, DetailTicket};
use crate::error::{Error, Result};
use crate::feed::ListEvent;
use crate::notifier::{FETCH_ERROR_MESSAGE, FETCH_ERROR_TITLE, Notifier};

/// Row actions understood by the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    ViewDetails,
}

impl RowAction {
    pub fn from_name(name: &str) -> Option<Self> {
        if name == VIEW_DETAILS_ACTION.name {
            Some(RowAction::ViewDetails)
        } else {
            None
        }
    }
}

/// State of the posting list component.
///
/// `full_list` is the source of truth and is only ever replaced wholesale.
/// `visible` and `facets` are derived from it by the engine's pure
/// transforms and are recomputed, never patched.
#[derive(Debug, Clone, Default)]
pub struct PostingListView {
    full_list: Vec<PostingRow>,
    visible: Vec<PostingRow>,
    facets: Vec<FacetOption>,
    filter: FilterState,
    sort: SortState,
    sort_applied: bool,
    loaded: bool,
    modal: DetailModal,
    last_ticket: u64,
}

impl PostingListView {
    pub fn new() -> Self {
        Self {
            facets: vec![FacetOption::all()],
            ..Default::default()
        }
    }

    /// Start with a different sort indicator (it is not applied until the
    /// user sorts)
    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    // --- list feed ---

    /// Apply one "list changed" notification.
    ///
    /// On success the full list and all derived state are replaced. On
    /// failure the user is notified and the current data is left as is.
    pub fn on_list_event(&mut self, event: ListEvent, notifier: &dyn Notifier) -> Result<()> {
        match event {
            ListEvent::Loaded(postings) => {
                self.load(postings);
                Ok(())
            }
            ListEvent::Failed(err) => {
                tracing::error!(error = %err, "Error fetching job postings");
                notifier.notify_error(FETCH_ERROR_TITLE, FETCH_ERROR_MESSAGE);
                Err(Error::ListFetch(err))
            }
        }
    }

    fn load(&mut self, postings: Vec<Posting>) {
        let IngestedList { rows, facets } = ingest(postings);
        tracing::debug!(count = rows.len(), facets = facets.len(), "posting list replaced");

        self.full_list = rows;
        self.facets = facets;
        self.loaded = true;
        self.refilter();
    }

    // --- filter / sort ---

    pub fn select_department(&mut self, value: &str) {
        self.filter.selected_department = value.to_string();
        self.refilter();
    }

    /// Set the search term from raw input (lowercased before use)
    pub fn search(&mut self, raw: &str) {
        self.filter.search_term = raw.to_lowercase();
        self.refilter();
    }

    /// Replace both filters at once
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.refilter();
    }

    /// Re-filtering always starts from the full list, so a previously applied
    /// sort is dropped and the visible list returns to fetch order.
    fn refilter(&mut self) {
        self.visible = apply_filters(&self.full_list, &self.filter);
        self.sort_applied = false;
    }

    /// Sort the currently visible rows
    pub fn sort_by(&mut self, field: SortField, direction: SortDirection) {
        self.sort = SortState::new(field, direction);
        self.visible = apply_sort(&self.visible, field, direction);
        self.sort_applied = true;
    }

    // --- detail modal ---

    /// Dispatch a named row action. Unknown actions are ignored.
    pub fn handle_row_action(&mut self, action: &str, row: &PostingRow) -> Option<DetailTicket> {
        match RowAction::from_name(action) {
            Some(RowAction::ViewDetails) => Some(self.begin_detail(row.id().clone())),
            None => {
                tracing::debug!(action, "ignoring unknown row action");
                None
            }
        }
    }

    /// Move the modal to `Loading` and issue the ticket the response must carry
    pub fn begin_detail(&mut self, id: PostingId) -> DetailTicket {
        self.last_ticket += 1;
        let ticket = DetailTicket::new(self.last_ticket);
        tracing::debug!(%ticket, %id, "detail requested");
        self.modal = DetailModal::Loading { ticket, id };
        ticket
    }

    /// Feed a detail response back into the modal.
    ///
    /// Only the ticket the modal is waiting for can open it; anything else is
    /// dropped as `Superseded`. A failure for the current ticket closes the
    /// modal, notifies the user and is returned as `Error::DetailFetch`.
    pub fn complete_detail(
        &mut self,
        ticket: DetailTicket,
        result: std::result::Result<Posting, jobboard_providers::Error>,
        notifier: &dyn Notifier,
    ) -> Result<DetailOutcome> {
        let id = match &self.modal {
            DetailModal::Loading { ticket: pending, id } if *pending == ticket => id.clone(),
            _ => {
                tracing::debug!(%ticket, "dropping superseded detail response");
                return Ok(DetailOutcome::Superseded);
            }
        };

        match result {
            Ok(posting) => {
                self.modal = DetailModal::Open {
                    ticket,
                    posting: Box::new(posting),
                };
                Ok(DetailOutcome::Opened)
            }
            Err(source) => {
                tracing::error!(%id, error = %source, "Error fetching job posting details");
                self.modal = DetailModal::Closed;
                notifier.notify_error(FETCH_ERROR_TITLE, FETCH_ERROR_MESSAGE);
                Err(Error::DetailFetch { id, source })
            }
        }
    }

    /// Close the modal and drop the selected record. A pending request is
    /// abandoned: its response will be superseded.
    pub fn close_detail(&mut self) {
        self.modal = DetailModal::Closed;
    }

    // --- accessors ---

    pub fn full_list(&self) -> &[PostingRow] {
        &self.full_list
    }

    pub fn visible(&self) -> &[PostingRow] {
        &self.visible
    }

    pub fn facets(&self) -> &[FacetOption] {
        &self.facets
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// Whether `visible` is currently in sort order (as opposed to fetch order)
    pub fn is_sorted(&self) -> bool {
        self.sort_applied
    }

    /// Whether at least one list fetch has succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn modal(&self) -> &DetailModal {
        &self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn selected(&self) -> Option<&Posting> {
        self.modal.selected()
    }

    pub fn find_visible(&self, id: &PostingId) -> Option<&PostingRow> {
        self.visible.iter().find(|row| row.id() == id)
    }
}
