use jobboard_types::{FacetOption, PostingRow};
use std::collections::HashSet;

/// Distinct non-empty departments, in first-seen order, behind the
/// "All Departments" option.
pub fn extract_facets(rows: &[PostingRow]) -> Vec<FacetOption> {
    let mut seen = HashSet::new();
    let departments = rows
        .iter()
        .filter_map(|row| row.posting.department.as_deref())
        .filter(|dept| !dept.is_empty())
        .filter(|dept| seen.insert(*dept))
        .map(|dept| FacetOption::new(dept, dept));

    std::iter::once(FacetOption::all())
        .chain(departments)
        .collect()
}
