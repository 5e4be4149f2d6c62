//! # Presentation Layer
//!
//! MVVM-style split between the posting list state (`jobboard_runtime`) and
//! what ends up on the terminal.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! * `view_models/`: serializable data contracts. Raw values, no formatting.
//! * `presenters/`: pure functions from runtime state to view models.
//! * `views/`: `fmt::Display` layouts per `ViewMode`, using `formatters`.
//! * `renderers/`: console (text/JSON) and the interactive browse TUI.
//! * `formatters/`: small string helpers shared by views.
//!
//! `--format json` ignores `ViewMode` and always dumps the full view model.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, EmptyReason, ListNotice, OutputFormat, ViewMode,
};
