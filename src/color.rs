//! ANSI coloring for labels and result lines.

use owo_colors::OwoColorize;

/// Semantic colors used in printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Passing results.
    Green,
    /// Failing results.
    Red,
    /// Skipped or otherwise non-fatal results.
    Yellow,
}

/// Wrap `text` in the ANSI foreground escape for `color`.
pub fn color_string(text: &str, color: Color) -> String {
    match color {
        Color::Green => text.green().to_string(),
        Color::Red => text.red().to_string(),
        Color::Yellow => text.yellow().to_string(),
    }
}

/// Color `text` when `enabled`, otherwise return it unchanged.
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        color_string(text, color)
    } else {
        text.to_string()
    }
}
