use futures::future::BoxFuture;
use jobboard_types::{Posting, PostingId};

use crate::Result;

/// Backend that owns job postings
///
/// Responsibilities:
/// - Return the currently active postings (list feed)
/// - Return the full record for one posting (detail feed)
///
/// Both calls are opaque to the caller: they either yield records or fail.
/// Implementations must be cheap to share behind an `Arc` because detail
/// fetches are spawned as independent tasks.
pub trait PostingSource: Send + Sync {
    /// Short identifier used in logs (e.g., "json-file", "memory")
    fn id(&self) -> &'static str;

    /// Fetch all active postings, in backend order
    fn list_postings(&self) -> BoxFuture<'_, Result<Vec<Posting>>>;

    /// Fetch the full record of a single posting
    fn get_detail<'a>(&'a self, id: &'a PostingId) -> BoxFuture<'a, Result<Posting>>;
}
