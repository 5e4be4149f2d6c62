use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Label of the synthetic facet that disables the department filter
pub const ALL_DEPARTMENTS_LABEL: &str = "All Departments";

/// A selectable department facet
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetOption {
    pub label: String,
    pub value: String,
}

impl FacetOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The "All Departments" option (empty value = no filter)
    pub fn all() -> Self {
        Self::new(ALL_DEPARTMENTS_LABEL, "")
    }

    pub fn is_all(&self) -> bool {
        self.value.is_empty()
    }
}

/// Department and search-term filters. Empty strings mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_department: String,
    /// Always stored lowercased
    pub search_term: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.selected_department = department.into();
        self
    }

    /// Set the search term from raw user input. The term is lowercased, not trimmed.
    pub fn search(mut self, raw: &str) -> Self {
        self.search_term = raw.to_lowercase();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.selected_department.is_empty() && self.search_term.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(Error::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Sortable posting fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    Title,
    Department,
    Location,
    OpenPositions,
    PostingDate,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Title,
        SortField::Department,
        SortField::Location,
        SortField::OpenPositions,
        SortField::PostingDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Department => "department",
            SortField::Location => "location",
            SortField::OpenPositions => "open-positions",
            SortField::PostingDate => "posting-date",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = Error;

    /// Accepts kebab-case, snake_case and the platform field names emitted by
    /// table header events (`Job_Title__c`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" | "Job_Title__c" => Ok(SortField::Title),
            "department" | "Department__c" => Ok(SortField::Department),
            "location" | "Location__c" => Ok(SortField::Location),
            "open-positions" | "open_positions" | "Total_Open_Positions__c" => {
                Ok(SortField::OpenPositions)
            }
            "posting-date" | "posting_date" | "Posting_Date__c" => Ok(SortField::PostingDate),
            _ => Err(Error::UnknownSortField(s.to_string())),
        }
    }
}

/// Field and direction of the table sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl Default for SortState {
    /// Newest postings first
    fn default() -> Self {
        Self::new(SortField::PostingDate, SortDirection::Desc)
    }
}
