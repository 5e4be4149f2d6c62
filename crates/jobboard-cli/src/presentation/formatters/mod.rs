pub mod date;
pub mod style;
pub mod text;
