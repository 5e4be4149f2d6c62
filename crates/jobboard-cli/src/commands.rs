use super::args::{Cli, Commands};
use super::handlers;
use crate::logging::{LogTarget, init_logging};
use anyhow::{Context, Result};
use jobboard_runtime::Config;

pub fn run(cli: Cli) -> Result<()> {
    let log_target = match cli.command {
        Commands::Browse => LogTarget::Discard,
        _ => LogTarget::Stderr,
    };
    init_logging(cli.log_level, log_target);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(source) = cli.source {
        config = config.with_source_path(source);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match cli.command {
        Commands::List {
            department,
            search,
            sort,
            direction,
            view_mode,
        } => handlers::list::handle(
            &runtime,
            &config,
            department,
            search,
            sort.map(Into::into),
            direction.map(Into::into),
            cli.format,
            &view_mode,
        ),

        Commands::Departments { view_mode } => {
            handlers::departments::handle(&runtime, &config, cli.format, &view_mode)
        }

        Commands::Show {
            posting_id,
            view_mode,
        } => handlers::show::handle(&runtime, &config, &posting_id, cli.format, &view_mode),

        Commands::Browse => handlers::browse::handle(&runtime, &config),
    }
}
