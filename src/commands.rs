//! Command pattern for key event handling in the TUI application.
//!
//! Key events are translated into [`AppCommand`]s by a pure mapping that
//! depends only on the [`InputContext`]. Executing the commands lives in
//! `state::app_commands`.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = map_key(key_event, &context);
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// A button has focus; letters are shortcuts.
    Main,
    /// The fund amount field has focus; letters are typed into it.
    FundInput,
}

impl InputContext {
    /// Returns `true` if this context accepts text input.
    #[must_use]
    pub const fn accepts_text_input(&self) -> bool {
        matches!(self, Self::FundInput)
    }
}

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,

    // === Dashboard Actions ===
    /// Request account access from the wallet.
    Connect,
    /// Query the contract balance.
    RefreshBalance,
    /// Call `withdraw()` on the contract.
    Withdraw,
    /// Validate the fund form and call `fund()`.
    SubmitFund,

    // === Focus ===
    /// Move focus to the next control.
    CycleFocus,
    /// Move focus to the previous control.
    CycleFocusBack,
    /// Activate the focused control.
    Press,
    /// Move focus into the fund field.
    FocusFundInput,
    /// Move focus out of the fund field.
    LeaveFundInput,

    // === Fund Input ===
    /// Type a character into the fund field.
    TypeChar(char),
    /// Delete the last character of the fund field.
    Backspace,

    // === Notifications ===
    /// Dismiss the newest notification.
    DismissNotification,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

impl AppCommand {
    /// Returns `true` if this command triggers a wallet interaction.
    #[must_use]
    pub const fn is_dashboard_action(&self) -> bool {
        matches!(
            self,
            Self::Connect | Self::RefreshBalance | Self::Withdraw | Self::SubmitFund
        )
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command.
    ///
    /// Ctrl+C quits from every context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }
        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::FundInput => Self::map_fund_input_keys(key),
        }
    }

    fn map_main_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('c') => AppCommand::Connect,
            KeyCode::Char('b') => AppCommand::RefreshBalance,
            KeyCode::Char('w') => AppCommand::Withdraw,
            KeyCode::Char('f') => AppCommand::FocusFundInput,
            KeyCode::Tab | KeyCode::Right => AppCommand::CycleFocus,
            KeyCode::BackTab | KeyCode::Left => AppCommand::CycleFocusBack,
            KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Press,
            KeyCode::Esc => AppCommand::DismissNotification,
            _ => AppCommand::Noop,
        }
    }

    fn map_fund_input_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter => AppCommand::SubmitFund,
            KeyCode::Esc => AppCommand::LeaveFundInput,
            KeyCode::Tab => AppCommand::CycleFocus,
            KeyCode::BackTab => AppCommand::CycleFocusBack,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }
}

/// Maps a key event using [`KeyMapper`].
#[must_use]
pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
    KeyMapper::map_key(key, context)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[rstest]
    #[case(KeyCode::Char('q'), AppCommand::Quit)]
    #[case(KeyCode::Char('c'), AppCommand::Connect)]
    #[case(KeyCode::Char('b'), AppCommand::RefreshBalance)]
    #[case(KeyCode::Char('w'), AppCommand::Withdraw)]
    #[case(KeyCode::Char('f'), AppCommand::FocusFundInput)]
    #[case(KeyCode::Tab, AppCommand::CycleFocus)]
    #[case(KeyCode::BackTab, AppCommand::CycleFocusBack)]
    #[case(KeyCode::Enter, AppCommand::Press)]
    #[case(KeyCode::Esc, AppCommand::DismissNotification)]
    #[case(KeyCode::Char('x'), AppCommand::Noop)]
    fn test_main_context_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(map_key(key(code), &InputContext::Main), expected);
    }

    #[rstest]
    #[case(KeyCode::Char('c'), AppCommand::TypeChar('c'))]
    #[case(KeyCode::Char('q'), AppCommand::TypeChar('q'))]
    #[case(KeyCode::Char('.'), AppCommand::TypeChar('.'))]
    #[case(KeyCode::Backspace, AppCommand::Backspace)]
    #[case(KeyCode::Enter, AppCommand::SubmitFund)]
    #[case(KeyCode::Esc, AppCommand::LeaveFundInput)]
    #[case(KeyCode::Tab, AppCommand::CycleFocus)]
    fn test_fund_input_context_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(map_key(key(code), &InputContext::FundInput), expected);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, &InputContext::Main), AppCommand::Quit);
        assert_eq!(map_key(ctrl_c, &InputContext::FundInput), AppCommand::Quit);
    }

    #[test]
    fn test_context_and_command_helpers() {
        assert!(InputContext::FundInput.accepts_text_input());
        assert!(!InputContext::Main.accepts_text_input());
        assert!(AppCommand::SubmitFund.is_dashboard_action());
        assert!(!AppCommand::TypeChar('1').is_dashboard_action());
    }
}
