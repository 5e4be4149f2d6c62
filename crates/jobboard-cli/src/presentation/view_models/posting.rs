use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PostingListViewModel {
    /// Visible postings, in display order
    pub postings: Vec<PostingEntryViewModel>,
    /// Size of the full (unfiltered) list
    pub total_count: usize,
    pub filter: FilterSummary,
    /// `None` while the list is in fetch order
    pub sort: Option<SortSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostingEntryViewModel {
    pub id: String,
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub open_positions: Option<i64>,
    pub posting_date: Option<NaiveDate>,
    pub priority_class: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterSummary {
    pub department: Option<String>,
    pub search: Option<String>,
}

impl FilterSummary {
    pub fn is_empty(&self) -> bool {
        self.department.is_none() && self.search.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SortSummary {
    pub field: String,
    pub direction: String,
}

#[derive(Debug, Serialize)]
pub struct FacetListViewModel {
    pub facets: Vec<FacetEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct FacetEntryViewModel {
    pub label: String,
    /// Filter value; empty for "All Departments"
    pub value: String,
    /// Postings the facet would show
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct PostingDetailViewModel {
    pub id: String,
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub open_positions: Option<i64>,
    pub posting_date: Option<NaiveDate>,
    pub priority_class: String,
    pub active: bool,
    pub description: Option<String>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for PostingListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::posting::PostingTableView;
        Box::new(PostingTableView::new(self, mode))
    }
}

impl CreateView for FacetListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::posting::FacetListView;
        Box::new(FacetListView::new(self, mode))
    }
}

impl CreateView for PostingDetailViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::posting::PostingDetailView;
        Box::new(PostingDetailView::new(self, mode))
    }
}
