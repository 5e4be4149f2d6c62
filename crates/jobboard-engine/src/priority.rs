use jobboard_types::{Posting, PostingRow, PriorityClass};

const HIGH_PRIORITY_MIN: i64 = 10;
const MEDIUM_PRIORITY_MIN: i64 = 5;

/// Map an open-position count to its priority class.
///
/// Total over all integers: `>= 10` is high, `5..10` medium, anything below
/// (zero and negatives included) low.
pub fn classify(open_positions: i64) -> PriorityClass {
    if open_positions >= HIGH_PRIORITY_MIN {
        PriorityClass::High
    } else if open_positions >= MEDIUM_PRIORITY_MIN {
        PriorityClass::Medium
    } else {
        PriorityClass::Low
    }
}

/// Priority class of a single posting. A posting without a count is low priority.
pub fn classify_posting(posting: &Posting) -> PriorityClass {
    posting.open_positions.map_or(PriorityClass::Low, classify)
}

/// Annotate postings with their priority class, preserving order.
pub fn annotate(postings: Vec<Posting>) -> Vec<PostingRow> {
    postings
        .into_iter()
        .map(|posting| PostingRow {
            priority_class: classify_posting(&posting),
            posting,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(10), PriorityClass::High);
        assert_eq!(classify(9), PriorityClass::Medium);
        assert_eq!(classify(5), PriorityClass::Medium);
        assert_eq!(classify(4), PriorityClass::Low);
        assert_eq!(classify(0), PriorityClass::Low);
        assert_eq!(classify(-1), PriorityClass::Low);
    }

    #[test]
    fn test_classify_extremes() {
        assert_eq!(classify(i64::MAX), PriorityClass::High);
        assert_eq!(classify(i64::MIN), PriorityClass::Low);
    }

    #[test]
    fn test_classify_is_monotonic() {
        let mut previous = classify(-20);
        for n in -20..40 {
            let current = classify(n);
            assert!(current >= previous, "classify({}) decreased", n);
            previous = current;
        }
    }

    #[test]
    fn test_annotate_missing_count_is_low() {
        let rows = annotate(vec![
            Posting::new("1").open_positions(12),
            Posting::new("2"),
        ]);
        assert_eq!(rows[0].priority_class, PriorityClass::High);
        assert_eq!(rows[1].priority_class, PriorityClass::Low);
    }
}
