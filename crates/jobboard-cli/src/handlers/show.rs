use crate::NotifiedError;
use crate::args::{OutputFormat, ViewModeArgs};
use crate::notifier::ConsoleNotifier;
use anyhow::Result;
use jobboard_runtime::{Config, Error, JobBoard};
use jobboard_types::PostingId;
use std::sync::Arc;
use tokio::runtime::Runtime;

pub fn handle(
    runtime: &Runtime,
    config: &Config,
    posting_id: &str,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    use crate::presentation::presenters;
    use crate::presentation::{ConsoleRenderer, Renderer};

    // The detail lookup goes straight to the source; no list fetch needed
    let mut board = JobBoard::from_config(config, Arc::new(ConsoleNotifier::new()))?;
    let id = PostingId::new(posting_id);

    let posting = match runtime.block_on(board.open_detail(&id)) {
        Ok(posting) => posting.clone(),
        Err(Error::DetailFetch { .. }) => return Err(NotifiedError.into()),
        Err(err) => return Err(err.into()),
    };

    let view_model = presenters::present_posting_detail(&posting);
    let renderer = ConsoleRenderer::new(format.into(), view_mode.resolve());
    renderer.render(view_model)?;

    Ok(())
}
