use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::formatters::style;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, ViewMode,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self { format, mode }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        // Scripts piping IDs get nothing but IDs
        let notice = result
            .notice
            .as_ref()
            .filter(|_| self.mode.shows_notices());
        let color = style::color_enabled();

        if let Some(notice) = notice {
            println!("{} {}", notice.icon(), style::header(&notice.message, color));
            println!();
        }

        print!("{}", result.content.create_view(self.mode));

        if let Some(notice) = notice
            && !notice.hints.is_empty()
        {
            println!("\n{}", style::header("Tips:", color));
            for hint in &notice.hints {
                if color {
                    println!("  • {}: {}", hint.description, hint.command.cyan());
                } else {
                    println!("  • {}: {}", hint.description, hint.command);
                }
            }
        }

        Ok(())
    }
}
