//! Main content panels: contract balance, action buttons and the fund form.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::{BUTTON_WIDTH, FUND_FORM_WIDTH_PERCENT};
use crate::state::{App, Focus};
use crate::theme::{BUTTON_STYLE, ERROR_COLOR, FOCUSED_BUTTON_STYLE, MUTED_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::create_border_block;

/// Placeholder shown in the empty fund field.
const FUND_PLACEHOLDER: &str = "amount in ETH";

// ============================================================================
// Balance
// ============================================================================

/// Renders the contract balance line.
pub fn render_balance(app: &App, frame: &mut Frame, area: Rect) {
    let block = create_border_block("Balance", false);
    let line = Line::from(vec![
        Span::raw("Smart Contract Balance: "),
        Span::styled(
            app.dashboard.balance().get(),
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ETH"),
    ]);
    let paragraph = Paragraph::new(line)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Buttons
// ============================================================================

/// Renders the Connect, GetBalance and Withdraw buttons.
pub fn render_buttons(app: &App, frame: &mut Frame, area: Rect) {
    let buttons = [
        ("Connect", Focus::Connect),
        ("GetBalance", Focus::GetBalance),
        ("Withdraw", Focus::Withdraw),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(buttons.map(|_| Constraint::Length(BUTTON_WIDTH)))
        .flex(Flex::Center)
        .spacing(2)
        .split(area);

    for ((label, focus), chunk) in buttons.into_iter().zip(chunks.iter()) {
        render_button(frame, *chunk, label, app.ui.focus == focus);
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let style = if focused {
        FOCUSED_BUTTON_STYLE
    } else {
        BUTTON_STYLE
    };
    let paragraph = Paragraph::new(Span::styled(format!(" {label} "), style))
        .block(create_border_block("", focused))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Fund Form
// ============================================================================

/// Renders the fund form: amount field, validation message and Fund button.
pub fn render_fund_form(app: &App, frame: &mut Frame, area: Rect) {
    let [form] = Layout::horizontal([Constraint::Percentage(FUND_FORM_WIDTH_PERCENT)])
        .flex(Flex::Center)
        .areas(area);

    let [field_area, error_area, button_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(form);

    let editing = app.ui.is_editing_fund();
    let field_text = if app.ui.fund_input.is_empty() && !editing {
        Line::from(Span::styled(
            FUND_PLACEHOLDER,
            Style::default().fg(MUTED_COLOR),
        ))
    } else if editing {
        Line::from(vec![
            Span::raw(app.ui.fund_input.as_str()),
            Span::styled("█", Style::default().fg(MUTED_COLOR)),
        ])
    } else {
        Line::from(app.ui.fund_input.as_str())
    };
    let field = Paragraph::new(field_text).block(create_border_block("fund amount", editing));
    frame.render_widget(field, field_area);

    if let Some(message) = app.ui.fund_error {
        let error = Paragraph::new(Span::styled(message, Style::default().fg(ERROR_COLOR)));
        frame.render_widget(error, error_area);
    }

    let [button] = Layout::horizontal([Constraint::Length(BUTTON_WIDTH)])
        .flex(Flex::Center)
        .areas(button_area);
    render_button(frame, button, "Fund", app.ui.focus == Focus::FundButton);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, mock_app};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App, render: fn(&App, &mut Frame, Rect), width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render(app, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_balance_shows_initial_value() {
        let app = mock_app();
        let content = draw(&app, render_balance, 80, 3);
        assert!(
            content.contains("Smart Contract Balance: 0 ETH"),
            "got: {content}"
        );
    }

    #[test]
    fn test_buttons_render_all_labels() {
        let app = mock_app();
        let content = draw(&app, render_buttons, 80, 3);
        for label in ["Connect", "GetBalance", "Withdraw"] {
            assert!(content.contains(label), "missing {label}, got: {content}");
        }
    }

    #[test]
    fn test_fund_form_shows_placeholder_and_validation() {
        let mut app = mock_app();
        let content = draw(&app, render_fund_form, 80, 7);
        assert!(content.contains("fund amount"));
        assert!(content.contains(FUND_PLACEHOLDER));
        assert!(content.contains("Fund"));
        assert!(!content.contains("Please input fund amount"));

        assert!(app.ui.take_fund_submission().is_none());
        let content = draw(&app, render_fund_form, 80, 7);
        assert!(
            content.contains("Please input fund amount"),
            "got: {content}"
        );
    }

    #[test]
    fn test_fund_form_echoes_input() {
        let mut app = mock_app();
        app.ui.focus_fund_input();
        for c in "0.25".chars() {
            app.ui.fund_type_char(c);
        }
        let content = draw(&app, render_fund_form, 80, 7);
        assert!(content.contains("0.25"), "got: {content}");
        assert!(!content.contains(FUND_PLACEHOLDER));
    }
}
