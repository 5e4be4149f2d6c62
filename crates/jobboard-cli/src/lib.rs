// NOTE: jobboard layering
//
// types      posting records, filter/sort state, column model
// providers  where postings come from (JSON export, in-memory)
// engine     pure transforms: priority classes, facets, filtering, sorting
// runtime    the stateful list view, detail modal tickets, list feed, config
// cli        argument parsing, console/JSON rendering, the browse TUI
//
// The CLI never filters or sorts on its own. Every command drives a
// `JobBoard` and renders whatever its `PostingListView` ends up showing, so
// `list`, `departments`, `show` and `browse` agree on the same semantics.

mod args;
mod commands;
mod error;
mod handlers;
pub mod logging;
pub mod notifier;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat, SortDirectionArg, SortFieldArg};
pub use commands::run;
pub use error::NotifiedError;
