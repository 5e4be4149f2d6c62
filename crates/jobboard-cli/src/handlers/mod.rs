pub mod browse;
pub mod departments;
pub mod list;
pub mod show;

use crate::NotifiedError;
use crate::notifier::ConsoleNotifier;
use anyhow::Result;
use jobboard_runtime::{Config, Error, JobBoard};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Build a board over the configured source and load the list once.
///
/// A failed fetch has already been reported by the notifier, so it comes back
/// as `NotifiedError`.
pub(crate) fn load_board(runtime: &Runtime, config: &Config) -> Result<JobBoard> {
    let mut board = JobBoard::from_config(config, Arc::new(ConsoleNotifier::new()))?;
    match runtime.block_on(board.refresh()) {
        Ok(()) => Ok(board),
        Err(Error::ListFetch(_)) => Err(NotifiedError.into()),
        Err(err) => Err(err.into()),
    }
}
