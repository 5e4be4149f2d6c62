use crate::args::{OutputFormat, ViewModeArgs};
use anyhow::Result;
use jobboard_runtime::Config;
use tokio::runtime::Runtime;

pub fn handle(
    runtime: &Runtime,
    config: &Config,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    use crate::presentation::presenters;
    use crate::presentation::{ConsoleRenderer, Renderer};

    let board = super::load_board(runtime, config)?;
    let view = board.view();

    let view_model = presenters::present_facets(view.facets(), view.full_list());
    let renderer = ConsoleRenderer::new(format.into(), view_mode.resolve());
    renderer.render(view_model)?;

    Ok(())
}
