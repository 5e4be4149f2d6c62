pub mod console;
pub mod traits;
pub mod tui;

pub use console::ConsoleRenderer;
pub use traits::Renderer;
pub use tui::BrowseTui;
