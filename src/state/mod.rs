//! State management for the fundboard TUI.
//!
//! The state is split by concern:
//!
//! - [`Dashboard`] - the view-model: displayed balance and wallet actions
//! - [`UiState`] - presentation: focus, fund form, notification toasts
//! - [`AppConfig`] - persistent configuration with load/save capabilities
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! ├──────────────────────┬───────────────────────┤
//! │      Dashboard       │        UiState        │
//! │  - balance cell      │  - focus              │
//! │  - wallet actions    │  - fund form          │
//! │  - confirmations     │  - toasts             │
//! └──────────────────────┴───────────────────────┘
//!            │ notifications (mpsc)  ▲
//!            └───────────────────────┘
//! ```
//!
//! Dashboard actions run as spawned tasks and report back through the
//! notification channel, which the main loop drains into [`UiState`].

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::client::{ReceiptWatcher, WalletProvider};
use crate::domain::Notification;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod dashboard;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{AppConfig, ConfigOverrides};
pub use dashboard::{BalanceCell, Dashboard};
pub use ui_state::{Focus, Toast, UiState};

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// The contract dashboard view-model.
    pub dashboard: Dashboard,

    /// UI state - focus, fund form, toasts.
    pub ui: UiState,

    /// Effective configuration (file plus command line overrides).
    pub config: AppConfig,

    /// Whether the application should exit.
    pub exit: bool,

    /// Notifications emitted by dashboard actions.
    pub(crate) notification_rx: mpsc::UnboundedReceiver<Notification>,

    /// Receipt poller, running while the app runs with a wallet.
    pub(crate) watcher: Option<ReceiptWatcher>,
}

impl App {
    /// Creates the application state. No task is started until [`App::run`].
    #[must_use]
    pub fn new(config: AppConfig, wallet: Option<Arc<dyn WalletProvider>>) -> Self {
        let (notification_tx, notification_rx) = mpsc::unbounded_channel();
        let dashboard = Dashboard::new(wallet, config.contract_address, notification_tx);

        Self {
            dashboard,
            ui: UiState::new(),
            config,
            exit: false,
            notification_rx,
            watcher: None,
        }
    }

    /// Number of transactions still waiting for their first confirmation.
    #[must_use]
    pub fn pending_transactions(&self) -> usize {
        self.dashboard.confirmations().pending_count()
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Command execution, input handling
mod app_commands;

// Spawning dashboard actions
mod app_actions;

// ============================================================================
// Tests
// ============================================================================
