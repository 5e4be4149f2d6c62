use jobboard_engine::classify_posting;
use jobboard_runtime::PostingListView;
use jobboard_types::{FacetOption, FilterState, Posting, PostingRow};

use crate::presentation::view_models::{
    CommandResultViewModel, FacetEntryViewModel, FacetListViewModel, FilterSummary, ListNotice,
    PostingDetailViewModel, PostingEntryViewModel, PostingListViewModel, SortSummary,
};

pub fn present_posting_list(
    view: &PostingListView,
) -> CommandResultViewModel<PostingListViewModel> {
    let postings: Vec<PostingEntryViewModel> = view.visible().iter().map(present_entry).collect();
    let filter = summarize_filter(view.filter());
    let sort = view.is_sorted().then(|| {
        let state = view.sort();
        SortSummary {
            field: state.field.to_string(),
            direction: state.direction.to_string(),
        }
    });

    let total_count = view.full_list().len();
    let notice = if total_count == 0 {
        Some(ListNotice::no_active_postings())
    } else if postings.is_empty() && !filter.is_empty() {
        Some(ListNotice::filters_exclude_all(&filter))
    } else {
        None
    };

    CommandResultViewModel::new(PostingListViewModel {
        postings,
        total_count,
        filter,
        sort,
    })
    .with_notice(notice)
}

fn present_entry(row: &PostingRow) -> PostingEntryViewModel {
    let posting = &row.posting;
    PostingEntryViewModel {
        id: posting.id.to_string(),
        title: posting.title.clone(),
        department: posting.department.clone(),
        location: posting.location.clone(),
        open_positions: posting.open_positions,
        posting_date: posting.posting_date,
        priority_class: row.priority_class.to_string(),
    }
}

fn summarize_filter(filter: &FilterState) -> FilterSummary {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
    FilterSummary {
        department: non_empty(&filter.selected_department),
        search: non_empty(&filter.search_term),
    }
}

/// Facet options with the number of listed postings each would show
pub fn present_facets(
    facets: &[FacetOption],
    rows: &[PostingRow],
) -> CommandResultViewModel<FacetListViewModel> {
    let facets = facets
        .iter()
        .map(|facet| {
            let count = if facet.is_all() {
                rows.len()
            } else {
                rows.iter()
                    .filter(|row| row.posting.department.as_deref() == Some(facet.value.as_str()))
                    .count()
            };
            FacetEntryViewModel {
                label: facet.label.clone(),
                value: facet.value.clone(),
                count,
            }
        })
        .collect();

    CommandResultViewModel::new(FacetListViewModel { facets })
}

pub fn present_posting_detail(posting: &Posting) -> CommandResultViewModel<PostingDetailViewModel> {
    CommandResultViewModel::new(PostingDetailViewModel {
        id: posting.id.to_string(),
        title: posting.title.clone(),
        department: posting.department.clone(),
        location: posting.location.clone(),
        open_positions: posting.open_positions,
        posting_date: posting.posting_date,
        priority_class: classify_posting(posting).to_string(),
        active: posting.active,
        description: posting.description.clone(),
    })
}
