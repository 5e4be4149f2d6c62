pub mod posting;

pub use posting::{present_facets, present_posting_detail, present_posting_list};
