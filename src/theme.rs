//! Theme and styling constants for the fundboard TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::Severity;

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Info indicator color.
pub const INFO_COLOR: Color = Color::Blue;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Label style for a focused button.
pub const FOCUSED_BUTTON_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(PRIMARY_COLOR)
    .add_modifier(Modifier::BOLD);

/// Label style for an unfocused button.
pub const BUTTON_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Color associated with a notification severity.
#[must_use]
pub const fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Warning => WARNING_COLOR,
        Severity::Info => INFO_COLOR,
        Severity::Success => SUCCESS_COLOR,
        Severity::Error => ERROR_COLOR,
    }
}
