use jobboard_types::PostingId;
use std::fmt;
use std::sync::Arc;

/// Result type for jobboard-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// The list feed delivered a failure (existing data is kept)
    ListFetch(Arc<jobboard_providers::Error>),

    /// A detail request failed (the detail view stays closed)
    DetailFetch {
        id: PostingId,
        source: jobboard_providers::Error,
    },

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Invalid operation or state
    InvalidOperation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ListFetch(err) => write!(f, "Failed to fetch postings: {}", err),
            Error::DetailFetch { id, source } => {
                write!(f, "Failed to fetch posting {}: {}", id, source)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ListFetch(err) => Some(err.as_ref()),
            Error::DetailFetch { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::InvalidOperation(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
