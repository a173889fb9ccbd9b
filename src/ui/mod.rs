//! UI rendering for the fundboard TUI.
//!
//! # Module Structure
//!
//! - `panels` - balance line, action buttons and the fund form
//! - `components` - overlays (toast notifications)
//! - `header` - header bar
//! - `footer` - keyboard shortcuts
//! - `helpers` - shared block styling

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod panels;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::constants::{BALANCE_HEIGHT, BUTTONS_HEIGHT, FUND_FORM_HEIGHT, HEADER_HEIGHT};
use crate::state::App;

/// Main render function.
///
/// Draws the header, balance, buttons, fund form and footer top to bottom,
/// then the toast stack on top of everything.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(BALANCE_HEIGHT),
            Constraint::Length(BUTTONS_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(FUND_FORM_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    header::render_header(frame, chunks[0], app);
    panels::render_balance(app, frame, chunks[1]);
    panels::render_buttons(app, frame, chunks[2]);
    panels::render_fund_form(app, frame, chunks[4]);
    footer::render(frame, chunks[6], app);

    components::render_toasts(frame, size, app.ui.visible_toasts());
}
