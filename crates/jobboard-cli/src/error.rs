use std::fmt;

/// A failure the user has already been told about through the notifier.
///
/// Handlers return it after a fetch error so that `main` exits non-zero
/// without printing the underlying error a second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifiedError;

impl fmt::Display for NotifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", jobboard_runtime::FETCH_ERROR_MESSAGE)
    }
}

impl std::error::Error for NotifiedError {}
