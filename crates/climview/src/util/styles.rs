//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Color for values that improve on the baseline
pub const COOL_COLOR: Color = Color::Green;

/// Color for moderate increases
pub const WARM_COLOR: Color = Color::Yellow;

/// Color for large increases
pub const HOT_COLOR: Color = Color::Red;

/// Create a block with a title that shows focused state via border color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Create a block with title and bottom help text.
pub fn block_with_help(title: &str, help_text: &str) -> Block<'static> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string());

    if !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }

    block
}

/// Color for a change relative to the 2023 baseline.
///
/// `severity` is the change divided by the global 2050 change for the same
/// metric, so 1.0 means "as bad as the global endpoint".
pub fn severity_color(severity: f64) -> Color {
    match severity {
        s if s <= 0.0 => COOL_COLOR,
        s if s < 0.5 => Color::LightGreen,
        s if s < 1.0 => WARM_COLOR,
        s if s < 1.3 => Color::LightRed,
        _ => HOT_COLOR,
    }
}
