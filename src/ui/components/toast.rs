//! Toast notification stack.
//!
//! Toasts stack downward from the top-right corner, newest on top, each
//! colored by its severity. They never take focus.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::constants::MIN_TOAST_HEIGHT;
use crate::domain::Notification;
use crate::state::Toast;
use crate::theme::severity_color;

/// Minimum width for a toast.
const MIN_TOAST_WIDTH: u16 = 20;

/// Horizontal padding from the right edge.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Vertical padding from the top edge.
const TOAST_PADDING_TOP: u16 = 1;

/// Extra width for borders and spacing.
const TOAST_WIDTH_PADDING: u16 = 4;

/// Rows taken by the top and bottom border.
const TOAST_BORDER_ROWS: u16 = 2;

/// Renders toasts in the top-right corner, first item on top.
///
/// Long messages wrap and the toast grows to fit them; the stack stops at the
/// first toast that no longer fits in `area`.
pub fn render_toasts<'a>(frame: &mut Frame, area: Rect, toasts: impl Iterator<Item = &'a Toast>) {
    let mut top = area.y.saturating_add(TOAST_PADDING_TOP);
    for toast in toasts {
        let Some(toast_area) = toast_position(area, &toast.notification, top) else {
            break;
        };
        render_toast(frame, toast_area, &toast.notification);
        top = toast_area.bottom();
    }
}

fn render_toast(frame: &mut Frame, area: Rect, notification: &Notification) {
    let color = severity_color(notification.severity);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", notification.severity.as_str()))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(notification.message.as_str())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(text, area);
}

/// Position of a toast whose top edge is at row `top`, or `None` once fewer
/// than [`MIN_TOAST_HEIGHT`] rows remain in `area`.
///
/// The height covers every wrapped line of the message, clipped to the rows
/// left in `area`.
#[must_use]
fn toast_position(area: Rect, notification: &Notification, top: u16) -> Option<Rect> {
    let message_len = u16::try_from(notification.message.chars().count()).unwrap_or(u16::MAX);
    let width = message_len
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);

    let available = area.bottom().saturating_sub(top);
    if available < MIN_TOAST_HEIGHT {
        return None;
    }
    let lines = wrapped_line_count(&notification.message, width.saturating_sub(2));
    let height = lines
        .saturating_add(TOAST_BORDER_ROWS)
        .clamp(MIN_TOAST_HEIGHT, available);
    let x = area.x + area.width.saturating_sub(width + TOAST_PADDING_RIGHT);

    Some(Rect::new(x, top, width, height))
}

/// Number of lines `text` takes when word-wrapped greedily to `width`
/// columns. Words longer than a line are broken across lines.
fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut lines = 1usize;
    let mut current = 0usize;
    for word in text.split_whitespace() {
        let mut len = word.chars().count();
        if current > 0 && current + 1 + len <= width {
            current += 1 + len;
            continue;
        }
        if current > 0 {
            lines += 1;
        }
        while len > width {
            len -= width;
            lines += 1;
        }
        current = len;
    }
    u16::try_from(lines).unwrap_or(u16::MAX)
}
