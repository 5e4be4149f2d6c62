use std::fmt;

/// Result type for jobboard-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unknown sort field name
    UnknownSortField(String),

    /// Unknown sort direction name
    UnknownSortDirection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSortField(name) => write!(f, "Unknown sort field: {}", name),
            Error::UnknownSortDirection(name) => write!(f, "Unknown sort direction: {}", name),
        }
    }
}

impl std::error::Error for Error {}
