//! Application constants for the fundboard TUI.
//!
//! UI dimensions and timing values shared across the application.

use std::time::Duration;

// ============================================================================
// Timing
// ============================================================================

/// Interval between UI ticks (redraw and toast countdown).
pub const TICK_RATE: Duration = Duration::from_millis(100);

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the balance panel (in rows).
pub const BALANCE_HEIGHT: u16 = 3;

/// Height of the button row (in rows).
pub const BUTTONS_HEIGHT: u16 = 3;

/// Height of the fund form (in rows): bordered input, validation line, button.
pub const FUND_FORM_HEIGHT: u16 = 7;

/// Width of the fund form, as a percentage of the screen.
pub const FUND_FORM_WIDTH_PERCENT: u16 = 50;

/// Width of a single button (in columns).
pub const BUTTON_WIDTH: u16 = 16;

/// Height of a one-line toast (in rows); longer messages grow the toast.
pub const MIN_TOAST_HEIGHT: u16 = 3;
