use crate::args::{OutputFormat, ViewModeArgs};
use anyhow::Result;
use jobboard_runtime::Config;
use jobboard_types::{FilterState, SortDirection, SortField};
use tokio::runtime::Runtime;

#[allow(clippy::too_many_arguments)]
pub fn handle(
    runtime: &Runtime,
    config: &Config,
    department: Option<String>,
    search: Option<String>,
    sort: Option<SortField>,
    direction: Option<SortDirection>,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    use crate::presentation::presenters;
    use crate::presentation::{ConsoleRenderer, Renderer};

    let mut board = super::load_board(runtime, config)?;

    let mut filter = FilterState::new();
    if let Some(department) = department {
        filter = filter.department(department);
    }
    if let Some(search) = search {
        filter = filter.search(&search);
    }
    board.view_mut().set_filter(filter);

    // Without --sort/--direction the list stays in fetch order
    if sort.is_some() || direction.is_some() {
        let configured = board.view().sort();
        board.view_mut().sort_by(
            sort.unwrap_or(configured.field),
            direction.unwrap_or(configured.direction),
        );
    }

    let view_model = presenters::present_posting_list(board.view());
    let renderer = ConsoleRenderer::new(format.into(), view_mode.resolve());
    renderer.render(view_model)?;

    Ok(())
}
