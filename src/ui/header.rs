//! Header bar: application title, contract address and pending transactions.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};
use crate::ui::helpers::create_border_block;

/// Title shown in the header.
pub const TITLE: &str = "Connect With Your Wallet To Fund Smart Contract";

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(48)])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    let mut status = vec![Span::styled(
        app.dashboard.contract_address().to_string(),
        Style::default().fg(MUTED_COLOR),
    )];
    let pending = app.pending_transactions();
    if pending > 0 {
        status.push(Span::styled(
            format!("  ⧗ {pending}"),
            Style::default().fg(WARNING_COLOR),
        ));
    }
    if app.dashboard.wallet().is_none() {
        status.push(Span::styled("  no wallet", Style::default().fg(WARNING_COLOR)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(status)).alignment(Alignment::Right),
        chunks[1],
    );
}
