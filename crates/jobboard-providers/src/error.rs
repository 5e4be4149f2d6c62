use jobboard_types::PostingId;
use std::fmt;
use std::path::PathBuf;

/// Result type for jobboard-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the providers layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// JSON parsing failed
    Json(serde_json::Error),

    /// Source file does not exist
    SourceMissing(PathBuf),

    /// File parsed, but holds no posting array where one is expected
    UnrecognizedShape(PathBuf),

    /// One record in the file is not a valid posting
    InvalidRecord {
        index: usize,
        id: Option<String>,
        source: serde_json::Error,
    },

    /// No posting with the requested id
    NotFound(PostingId),

    /// Source refused or failed the request
    Unavailable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::SourceMissing(path) => {
                write!(f, "Posting source not found: {}", path.display())
            }
            Error::UnrecognizedShape(path) => write!(
                f,
                "No posting array in {}: expected a JSON array or an object with \
                 `postings`, `records` or `content.postings`",
                path.display()
            ),
            Error::InvalidRecord { index, id, source } => match id {
                Some(id) => write!(f, "Invalid posting #{} ({}): {}", index, id, source),
                None => write!(f, "Invalid posting #{}: {}", index, source),
            },
            Error::NotFound(id) => write!(f, "Posting not found: {}", id),
            Error::Unavailable(msg) => write!(f, "Source unavailable: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::InvalidRecord { source, .. } => Some(source),
            Error::SourceMissing(_)
            | Error::UnrecognizedShape(_)
            | Error::NotFound(_)
            | Error::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
