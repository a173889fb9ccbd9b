//! UI state management for the fundboard TUI.
//!
//! This module manages presentation concerns only:
//! - Which control has focus
//! - The fund form (input text and required-field validation)
//! - The notification toast stack
//!
//! Nothing here talks to the wallet; the app turns UI state into dashboard
//! actions.

use crate::domain::Notification;

// ============================================================================
// Constants
// ============================================================================

/// Ticks a transient notification stays visible (4.5 s at the 100 ms tick).
pub const TOAST_TICKS: u16 = 45;

/// Maximum number of toasts drawn at once.
pub const MAX_VISIBLE_TOASTS: usize = 4;

/// Validation message for an empty fund field.
pub const FUND_REQUIRED_MESSAGE: &str = "Please input fund amount";

// ============================================================================
// Focus
// ============================================================================

/// The focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Connect,
    GetBalance,
    Withdraw,
    FundInput,
    FundButton,
}

impl Focus {
    /// Cycles to the next control.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Connect => Self::GetBalance,
            Self::GetBalance => Self::Withdraw,
            Self::Withdraw => Self::FundInput,
            Self::FundInput => Self::FundButton,
            Self::FundButton => Self::Connect,
        }
    }

    /// Cycles to the previous control.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Connect => Self::FundButton,
            Self::GetBalance => Self::Connect,
            Self::Withdraw => Self::GetBalance,
            Self::FundInput => Self::Withdraw,
            Self::FundButton => Self::FundInput,
        }
    }
}

// ============================================================================
// Toasts
// ============================================================================

/// A notification on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notification: Notification,
    /// Remaining ticks, `None` for persistent notifications.
    pub ticks_left: Option<u16>,
}

impl Toast {
    fn new(notification: Notification) -> Self {
        let ticks_left = (!notification.persistent).then_some(TOAST_TICKS);
        Self {
            notification,
            ticks_left,
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// UI state: focus, fund form and notifications.
///
/// # Example
///
/// ```ignore
/// use crate::state::UiState;
///
/// let mut ui = UiState::new();
/// ui.focus_fund_input();
/// ui.fund_type_char('1');
/// assert_eq!(ui.take_fund_submission().as_deref(), Some("1"));
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    /// Which control currently has focus.
    pub focus: Focus,
    /// Text of the fund amount field.
    pub fund_input: String,
    /// Validation message shown under the fund field.
    pub fund_error: Option<&'static str>,
    /// Toasts on screen, oldest first.
    pub toasts: Vec<Toast>,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Focus Management
    // ========================================================================

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Returns `true` if keystrokes go into the fund field.
    #[must_use]
    pub fn is_editing_fund(&self) -> bool {
        self.focus == Focus::FundInput
    }

    pub fn focus_fund_input(&mut self) {
        self.focus = Focus::FundInput;
    }

    /// Leaves the fund field, parking focus on the Fund button.
    pub fn leave_fund_input(&mut self) {
        self.focus = Focus::FundButton;
    }

    // ========================================================================
    // Fund Form
    // ========================================================================

    pub fn fund_type_char(&mut self, c: char) {
        self.fund_input.push(c);
        self.fund_error = None;
    }

    pub fn fund_backspace(&mut self) {
        self.fund_input.pop();
        self.fund_error = None;
    }

    /// Validates the form and returns the amount to submit.
    ///
    /// Only the required-field rule is checked; the amount itself is not
    /// validated here. The field keeps its text after submission.
    pub fn take_fund_submission(&mut self) -> Option<String> {
        if self.fund_input.trim().is_empty() {
            self.fund_error = Some(FUND_REQUIRED_MESSAGE);
            return None;
        }
        self.fund_error = None;
        Some(self.fund_input.clone())
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    pub fn push_notification(&mut self, notification: Notification) {
        self.toasts.push(Toast::new(notification));
    }

    /// Counts down transient toasts and removes expired ones.
    ///
    /// # Returns
    ///
    /// `true` if at least one toast was removed.
    pub fn tick_toasts(&mut self) -> bool {
        let before = self.toasts.len();
        for toast in &mut self.toasts {
            if let Some(ticks) = toast.ticks_left.as_mut() {
                *ticks = ticks.saturating_sub(1);
            }
        }
        self.toasts.retain(|t| t.ticks_left != Some(0));
        self.toasts.len() != before
    }

    /// Dismisses the newest toast.
    ///
    /// # Returns
    ///
    /// `true` if a toast was dismissed.
    pub fn dismiss_latest_toast(&mut self) -> bool {
        self.toasts.pop().is_some()
    }

    /// Toasts to draw, newest first.
    pub fn visible_toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev().take(MAX_VISIBLE_TOASTS)
    }
}

// ============================================================================
// Tests
// ============================================================================
