//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Library crates only emit `tracing` events; this module decides where they
//! go. Console commands log to stderr so stdout stays clean for JSON. The
//! browse TUI owns the terminal, so its events are discarded instead.
//!
//! `RUST_LOG` overrides `--log-level` when set.

use std::io;
use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::args::LogLevel;

/// Where formatted log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Drop everything (alternate-screen TUI)
    Discard,
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(level: LogLevel, target: LogTarget) {
    let level = Level::from(level);
    match target {
        LogTarget::Stderr => init_with_writer(level, io::stderr, is_stderr_terminal()),
        LogTarget::Discard => init_with_writer(level, io::sink, false),
    }
}

fn init_with_writer<W>(level: Level, writer: W, with_ansi: bool)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(with_ansi)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(layer)
        .try_init();
}

fn is_stderr_terminal() -> bool {
    use is_terminal::IsTerminal;
    io::stderr().is_terminal()
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// Dependencies stay at warn. `jobboard` prefix-matches the
/// `jobboard_runtime` and `jobboard_providers` targets too.
fn default_directives(level: Level) -> String {
    format!("warn,jobboard={}", level.as_str().to_lowercase())
}
