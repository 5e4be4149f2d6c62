pub mod column;
pub mod posting;
pub mod view;

pub use column::*;
pub use posting::*;
pub use view::*;
