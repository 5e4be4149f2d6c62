/// Placeholder for a field the source did not provide
pub const MISSING: &str = "-";

/// Truncate to `max_chars` characters, marking the cut with `…`
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

pub fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

/// Pad (or truncate) to an exact display width
pub fn fit(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    format!("{:<width$}", text, width = width)
}

/// Collapse whitespace runs (including newlines) into single spaces
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
