//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `run()` - Main event loop
//! - Background task management (receipt watcher)
//! - Draining notifications into the UI

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};

use crate::client::ReceiptWatcher;
use crate::constants::TICK_RATE;
use crate::tui::Tui;
use crate::ui;

use super::App;

impl App {
    /// Runs the main application loop.
    ///
    /// The balance is loaded once on start, like a page that fetches on mount.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start_background_tasks();
        self.spawn_refresh_balance();

        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_notifications();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.ui.tick_toasts();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        self.watcher = None;
        Ok(())
    }

    /// Starts the receipt watcher when a wallet is present.
    pub(crate) fn start_background_tasks(&mut self) {
        if let Some(wallet) = self.dashboard.wallet() {
            self.watcher = Some(ReceiptWatcher::spawn(
                self.dashboard.confirmations().clone(),
                wallet.clone(),
                self.config.poll_interval(),
            ));
        }
    }

    /// Moves every queued notification onto the toast stack.
    pub(crate) fn process_notifications(&mut self) {
        while let Ok(notification) = self.notification_rx.try_recv() {
            tracing::debug!(severity = notification.severity.as_str(), message = %notification.message, "notification");
            self.ui.push_notification(notification);
        }
    }
}
