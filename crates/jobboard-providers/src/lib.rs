pub mod error;
pub mod json_file;
pub mod memory;
pub mod traits;

pub use error::{Error, Result};
pub use json_file::JsonFileSource;
pub use memory::MemorySource;
pub use traits::PostingSource;
