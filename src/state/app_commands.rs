//! Command execution and input handling for the fundboard application.
//!
//! This module maps key events to commands and executes those commands,
//! either updating UI state directly or spawning a dashboard action.

use crossterm::event::KeyEvent;
use tokio::task::JoinHandle;

use super::{App, Focus};
use crate::commands::{AppCommand, InputContext, map_key};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) -> Option<JoinHandle<()>> {
        let context = self.get_input_context();
        let command = map_key(key_event, &context);
        self.execute_command(command)
    }

    /// Determines the current input context from the focused control.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        if self.ui.is_editing_fund() {
            InputContext::FundInput
        } else {
            InputContext::Main
        }
    }

    /// Executes an application command.
    ///
    /// Returns the handle of the spawned task when the command started a
    /// dashboard action. Actions are never serialized: pressing a button
    /// again while its previous action is still waiting starts another one.
    pub(crate) fn execute_command(&mut self, command: AppCommand) -> Option<JoinHandle<()>> {
        if command.is_dashboard_action() {
            tracing::debug!(?command, "dashboard action");
        }
        match command {
            AppCommand::Quit => {
                self.exit = true;
                None
            }

            // === Dashboard Actions ===
            AppCommand::Connect => Some(self.spawn_connect()),
            AppCommand::RefreshBalance => Some(self.spawn_refresh_balance()),
            AppCommand::Withdraw => Some(self.spawn_withdraw()),
            AppCommand::SubmitFund => self
                .ui
                .take_fund_submission()
                .map(|amount| self.spawn_fund(amount)),

            // === Focus ===
            AppCommand::CycleFocus => {
                self.ui.cycle_focus();
                None
            }
            AppCommand::CycleFocusBack => {
                self.ui.cycle_focus_back();
                None
            }
            AppCommand::FocusFundInput => {
                self.ui.focus_fund_input();
                None
            }
            AppCommand::LeaveFundInput => {
                self.ui.leave_fund_input();
                None
            }
            AppCommand::Press => self.press_focused(),

            // === Fund Input ===
            AppCommand::TypeChar(c) => {
                self.ui.fund_type_char(c);
                None
            }
            AppCommand::Backspace => {
                self.ui.fund_backspace();
                None
            }

            // === Notifications ===
            AppCommand::DismissNotification => {
                self.ui.dismiss_latest_toast();
                None
            }

            AppCommand::Noop => None,
        }
    }

    fn press_focused(&mut self) -> Option<JoinHandle<()>> {
        let command = match self.ui.focus {
            Focus::Connect => AppCommand::Connect,
            Focus::GetBalance => AppCommand::RefreshBalance,
            Focus::Withdraw => AppCommand::Withdraw,
            Focus::FundInput => AppCommand::FocusFundInput,
            Focus::FundButton => AppCommand::SubmitFund,
        };
        self.execute_command(command)
    }
}
