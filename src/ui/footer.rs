//! Footer bar with context-sensitive keyboard shortcuts.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::MUTED_COLOR;

const MAIN_SHORTCUTS: &str =
    "q:Quit  c:Connect  b:Balance  w:Withdraw  f:Fund  Tab:Focus  Enter:Press  Esc:Dismiss";

const FUND_INPUT_SHORTCUTS: &str = "Enter:Fund  Esc:Leave  Tab:Focus  Ctrl+C:Quit";

/// Renders the footer bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let text = if app.get_input_context().accepts_text_input() {
        FUND_INPUT_SHORTCUTS
    } else {
        MAIN_SHORTCUTS
    };
    let footer = Paragraph::new(text)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, mock_app};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_footer_displays_main_shortcuts() {
        let app = mock_app();
        let content = draw(&app);
        for shortcut in ["q:Quit", "c:Connect", "b:Balance", "w:Withdraw", "f:Fund"] {
            assert!(
                content.contains(shortcut),
                "Footer should contain '{shortcut}', got: {content}"
            );
        }
    }

    #[test]
    fn test_footer_switches_while_editing() {
        let mut app = mock_app();
        app.ui.focus_fund_input();
        let content = draw(&app);
        assert!(content.contains("Esc:Leave"), "got: {content}");
        assert!(!content.contains("q:Quit"));
    }

    #[test]
    fn test_footer_zero_height_does_not_panic() {
        let app = mock_app();
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 80, 0), &app))
            .unwrap();
    }
}
