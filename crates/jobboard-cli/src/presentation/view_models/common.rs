use serde::Serialize;

use super::posting::FilterSummary;

/// How much of each record the text views print.
///
/// `Minimal` is meant for scripts: ids or labels only, never a notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Minimal,
    Compact,
    #[default]
    Standard,
    Verbose,
}

impl ViewMode {
    pub fn shows_notices(self) -> bool {
        self != ViewMode::Minimal
    }
}

/// Text views, or the view model itself as JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<crate::args::OutputFormat> for OutputFormat {
    fn from(format: crate::args::OutputFormat) -> Self {
        match format {
            crate::args::OutputFormat::Plain => Self::Text,
            crate::args::OutputFormat::Json => Self::Json,
        }
    }
}

/// Why a posting list rendered no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyReason {
    /// The source returned no active postings
    NoActivePostings,
    /// Postings exist but the department and search filters exclude them all
    FiltersExcludeAll,
}

/// Printed above an empty posting list, with commands that bring rows back
#[derive(Debug, Clone, Serialize)]
pub struct ListNotice {
    pub reason: EmptyReason,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<CommandHint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandHint {
    pub description: String,
    pub command: String,
}

impl CommandHint {
    fn new(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: command.into(),
        }
    }
}

impl ListNotice {
    pub fn no_active_postings() -> Self {
        Self {
            reason: EmptyReason::NoActivePostings,
            message: "No active postings".to_string(),
            hints: vec![CommandHint::new(
                "Point jobboard at a posting export",
                "jobboard --source <FILE> list",
            )],
        }
    }

    /// Hints relax one filter at a time before offering to clear both.
    pub fn filters_exclude_all(filter: &FilterSummary) -> Self {
        let mut hints = Vec::new();
        let message = match (&filter.department, &filter.search) {
            (Some(department), Some(search)) => {
                hints.push(CommandHint::new(
                    format!("Search every department for \"{search}\""),
                    format!("jobboard list --search {search:?}"),
                ));
                hints.push(CommandHint::new(
                    format!("List all of {department}"),
                    format!("jobboard list --department {department:?}"),
                ));
                format!("No postings in {department} match \"{search}\"")
            }
            (Some(department), None) => {
                hints.push(CommandHint::new(
                    "See the departments that have postings",
                    "jobboard departments",
                ));
                format!("No postings in {department}")
            }
            (None, Some(search)) => format!("No postings match \"{search}\""),
            (None, None) => "No postings match the current filters".to_string(),
        };
        hints.push(CommandHint::new("Clear the filters", "jobboard list"));

        Self {
            reason: EmptyReason::FiltersExcludeAll,
            message,
            hints,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.reason {
            EmptyReason::NoActivePostings => "ℹ",
            EmptyReason::FiltersExcludeAll => "⚠",
        }
    }
}
