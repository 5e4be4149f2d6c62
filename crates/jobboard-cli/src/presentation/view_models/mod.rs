pub mod common;
pub mod posting;
pub mod result;

pub use common::{CommandHint, EmptyReason, ListNotice, OutputFormat, ViewMode};
pub use posting::{
    FacetEntryViewModel, FacetListViewModel, FilterSummary, PostingDetailViewModel,
    PostingEntryViewModel, PostingListViewModel, SortSummary,
};
pub use result::CommandResultViewModel;

use std::fmt;

/// Bridge from a view model to the text view that lays it out
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
