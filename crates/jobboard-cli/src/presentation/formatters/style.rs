use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Colors only when stdout is a terminal
pub fn color_enabled() -> bool {
    std::io::stdout().is_terminal()
}

/// Style `text` by its priority class name (`high-priority`, ...)
pub fn priority(text: &str, priority_class: &str, enable_color: bool) -> String {
    if !enable_color {
        return text.to_string();
    }
    match priority_class {
        "high-priority" => text.red().bold().to_string(),
        "medium-priority" => text.yellow().to_string(),
        _ => text.green().to_string(),
    }
}

/// Short marker used where color is unavailable
pub fn priority_marker(priority_class: &str) -> &'static str {
    match priority_class {
        "high-priority" => "!!",
        "medium-priority" => "! ",
        _ => "  ",
    }
}

pub fn header(text: &str, enable_color: bool) -> String {
    if enable_color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dimmed(text: &str, enable_color: bool) -> String {
    if enable_color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
