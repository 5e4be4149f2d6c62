use serde::Serialize;

use super::view::SortField;

/// How a column's values are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Text,
    Number,
    Date,
}

/// Table column definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub label: &'static str,
    pub field: SortField,
    pub kind: ColumnKind,
    pub sortable: bool,
    /// Whether cells carry the row's priority class as their style
    pub priority_styled: bool,
}

/// A named action offered on every row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowActionDef {
    pub label: &'static str,
    pub name: &'static str,
}

pub const VIEW_DETAILS_ACTION: RowActionDef = RowActionDef {
    label: "View Details",
    name: "view_details",
};

pub const ROW_ACTIONS: [RowActionDef; 1] = [VIEW_DETAILS_ACTION];

/// Posting table columns, in display order
pub fn posting_columns() -> Vec<Column> {
    vec![
        Column {
            label: "Job Title",
            field: SortField::Title,
            kind: ColumnKind::Text,
            sortable: true,
            priority_styled: true,
        },
        Column {
            label: "Department",
            field: SortField::Department,
            kind: ColumnKind::Text,
            sortable: true,
            priority_styled: false,
        },
        Column {
            label: "Location",
            field: SortField::Location,
            kind: ColumnKind::Text,
            sortable: false,
            priority_styled: false,
        },
        Column {
            label: "Open Positions",
            field: SortField::OpenPositions,
            kind: ColumnKind::Number,
            sortable: true,
            priority_styled: false,
        },
        Column {
            label: "Posting Date",
            field: SortField::PostingDate,
            kind: ColumnKind::Date,
            sortable: true,
            priority_styled: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_is_not_sortable() {
        let columns = posting_columns();
        let sortable: Vec<SortField> = columns
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.field)
            .collect();
        assert_eq!(
            sortable,
            vec![
                SortField::Title,
                SortField::Department,
                SortField::OpenPositions,
                SortField::PostingDate
            ]
        );
    }

    #[test]
    fn test_only_title_is_priority_styled() {
        let styled: Vec<&str> = posting_columns()
            .iter()
            .filter(|c| c.priority_styled)
            .map(|c| c.label)
            .collect();
        assert_eq!(styled, vec!["Job Title"]);
    }
}
