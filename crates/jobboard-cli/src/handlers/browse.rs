use crate::notifier::ToastNotifier;
use crate::presentation::renderers::BrowseTui;
use anyhow::Result;
use jobboard_runtime::{Config, JobBoard};
use std::sync::Arc;
use tokio::runtime::Runtime;

pub fn handle(runtime: &Runtime, config: &Config) -> Result<()> {
    let toast = Arc::new(ToastNotifier::new());
    let mut board = JobBoard::from_config(config, toast.clone())?;

    // A failed first fetch leaves an empty table with the toast showing
    if let Err(err) = runtime.block_on(board.refresh()) {
        tracing::debug!(error = %err, "initial fetch failed");
    }

    BrowseTui::new(board, toast, runtime.handle().clone()).run()
}
