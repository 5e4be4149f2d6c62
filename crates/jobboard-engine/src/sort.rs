use jobboard_types::{PostingRow, SortDirection, SortField};
use std::cmp::Ordering;

/// Three-way comparison on one field, ascending.
///
/// Strings compare lexicographically, counts numerically and dates
/// chronologically. A missing value sorts before any present value.
pub fn compare_rows(a: &PostingRow, b: &PostingRow, field: SortField) -> Ordering {
    let (a, b) = (&a.posting, &b.posting);
    match field {
        SortField::Title => a.title.as_deref().cmp(&b.title.as_deref()),
        SortField::Department => a.department.as_deref().cmp(&b.department.as_deref()),
        SortField::Location => a.location.as_deref().cmp(&b.location.as_deref()),
        SortField::OpenPositions => a.open_positions.cmp(&b.open_positions),
        SortField::PostingDate => a.posting_date.cmp(&b.posting_date),
    }
}

/// Return a sorted copy of `rows`. The sort is stable: rows with equal keys
/// keep their relative input order in both directions.
pub fn apply_sort(rows: &[PostingRow], field: SortField, direction: SortDirection) -> Vec<PostingRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_rows(a, b, field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}
