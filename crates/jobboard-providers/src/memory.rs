use futures::future::{BoxFuture, FutureExt};
use jobboard_types::{Posting, PostingId};
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::traits::PostingSource;
use crate::{Error, Result};

/// In-process posting source.
///
/// Used by embedders that already hold the records and by tests, which can
/// make the list or individual detail lookups fail on demand.
#[derive(Default)]
pub struct MemorySource {
    postings: Mutex<Vec<Posting>>,
    fail_list: AtomicBool,
    failing_details: Mutex<HashSet<PostingId>>,
    list_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl MemorySource {
    pub fn new(postings: Vec<Posting>) -> Self {
        Self {
            postings: Mutex::new(postings),
            ..Default::default()
        }
    }

    /// Replace the backing records (the next list call sees the new set)
    pub fn set_postings(&self, postings: Vec<Posting>) {
        *self.postings.lock().unwrap() = postings;
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_detail(&self, id: impl Into<PostingId>) {
        self.failing_details.lock().unwrap().insert(id.into());
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

impl PostingSource for MemorySource {
    fn id(&self) -> &'static str {
        "memory"
    }

    fn list_postings(&self) -> BoxFuture<'_, Result<Vec<Posting>>> {
        async move {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(Error::Unavailable("list request rejected".to_string()));
            }
            let postings = self.postings.lock().unwrap();
            Ok(postings.iter().filter(|p| p.active).cloned().collect())
        }
        .boxed()
    }

    fn get_detail<'a>(&'a self, id: &'a PostingId) -> BoxFuture<'a, Result<Posting>> {
        async move {
            self.detail_calls.fetch_add(1, Ordering::SeqCst);
            if self.failing_details.lock().unwrap().contains(id) {
                return Err(Error::Unavailable(format!("detail request for {} rejected", id)));
            }
            self.postings
                .lock()
                .unwrap()
                .iter()
                .find(|p| &p.id == id)
                .cloned()
                .ok_or_else(|| Error::NotFound(id.clone()))
        }
        .boxed()
    }
}
