// Engine module - pure view-model transforms over posting snapshots
// This layer sits between raw postings (types) and the stateful list view (runtime)

pub mod facets;
pub mod filter;
pub mod priority;
pub mod sort;

pub use facets::extract_facets;
pub use filter::{apply_filters, matches_filter};
pub use priority::{annotate, classify, classify_posting};
pub use sort::{apply_sort, compare_rows};

use jobboard_types::{FacetOption, Posting, PostingRow};

/// Result of ingesting a freshly fetched list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestedList {
    pub rows: Vec<PostingRow>,
    pub facets: Vec<FacetOption>,
}

/// Classify every posting and derive the department facets in one pass
pub fn ingest(postings: Vec<Posting>) -> IngestedList {
    let rows = annotate(postings);
    let facets = extract_facets(&rows);
    IngestedList { rows, facets }
}
