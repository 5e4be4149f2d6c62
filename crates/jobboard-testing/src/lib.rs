//! Testing infrastructure for jobboard integration tests.
//!
//! - `TestWorld`: isolated config + posting file, runs the CLI binary
//! - `assertions`: checks over `--format json` output
//! - `fixtures`: the shared sample postings

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
