use jobboard_types::{FilterState, PostingRow};

/// Recompute the visible list from the full list.
///
/// Department match is exact and case-sensitive. The search term (already
/// lowercased) must be a substring of the lowercased title, department or
/// location; a missing field never matches. Order follows `rows`.
pub fn apply_filters(rows: &[PostingRow], filter: &FilterState) -> Vec<PostingRow> {
    rows.iter()
        .filter(|row| matches_filter(row, filter))
        .cloned()
        .collect()
}

pub fn matches_filter(row: &PostingRow, filter: &FilterState) -> bool {
    matches_department(row, &filter.selected_department) && matches_search(row, &filter.search_term)
}

fn matches_department(row: &PostingRow, department: &str) -> bool {
    department.is_empty() || row.posting.department.as_deref() == Some(department)
}

fn matches_search(row: &PostingRow, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let posting = &row.posting;
    [&posting.title, &posting.department, &posting.location]
        .into_iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate;
    use jobboard_types::Posting;

    fn sample() -> Vec<PostingRow> {
        annotate(vec![
            Posting::new("1")
                .title("Engineer")
                .department("Eng")
                .location("NY")
                .open_positions(12),
            Posting::new("2")
                .title("Analyst")
                .department("Sales")
                .location("NY")
                .open_positions(3),
            Posting::new("3").title("Recruiter").location("Remote"),
        ])
    }

    fn ids(rows: &[PostingRow]) -> Vec<&str> {
        rows.iter().map(|r| r.id().as_str()).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let rows = sample();
        assert_eq!(apply_filters(&rows, &FilterState::new()), rows);
    }

    #[test]
    fn test_department_exact_match() {
        let rows = sample();
        let filtered = apply_filters(&rows, &FilterState::new().department("Sales"));
        assert_eq!(ids(&filtered), vec!["2"]);

        let filtered = apply_filters(&rows, &FilterState::new().department("sales"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let rows = sample();
        let filtered = apply_filters(&rows, &FilterState::new().search("ny"));
        assert_eq!(ids(&filtered), vec!["1", "2"]);

        let filtered = apply_filters(&rows, &FilterState::new().search("ENGINEER"));
        assert_eq!(ids(&filtered), vec!["1"]);
    }

    #[test]
    fn test_search_matches_department() {
        let rows = sample();
        let filtered = apply_filters(&rows, &FilterState::new().search("sal"));
        assert_eq!(ids(&filtered), vec!["2"]);
    }

    #[test]
    fn test_missing_field_does_not_match() {
        let rows = annotate(vec![Posting::new("bare")]);
        let filtered = apply_filters(&rows, &FilterState::new().search("a"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filters_compose_with_and() {
        let rows = sample();
        let filter = FilterState::new().department("Eng").search("analyst");
        assert!(apply_filters(&rows, &filter).is_empty());

        let filter = FilterState::new().department("Sales").search("ny");
        assert_eq!(ids(&apply_filters(&rows, &filter)), vec!["2"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let rows = sample();
        let filter = FilterState::new().search("ny");
        let once = apply_filters(&rows, &filter);
        let twice = apply_filters(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_department_yields_empty() {
        let rows = sample();
        assert!(apply_filters(&rows, &FilterState::new().department("Legal")).is_empty());
    }
}
