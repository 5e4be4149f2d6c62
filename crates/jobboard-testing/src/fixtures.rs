//! Sample posting files shared with the provider tests.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Default sample: eight postings, seven active
pub const SAMPLE_POSTINGS: &str = "postings.json";

/// Sample file manager for test data.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    /// Samples live in `crates/jobboard-providers/tests/samples/`.
    pub fn new() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let samples_dir = manifest_dir
            .parent()
            .expect("crate lives under crates/")
            .join("jobboard-providers/tests/samples");

        Self { samples_dir }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    /// Copy a sample file to a destination.
    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(self.path(sample_name), dest)?;
        Ok(())
    }
}
