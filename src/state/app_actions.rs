//! Spawning of dashboard actions.
//!
//! Every action runs in its own task. `fund` and `withdraw` report their own
//! failures as notifications; `connect` and balance refreshes do not, so a
//! failure there ends the task with an error that is only logged.

use std::future::Future;

use tokio::task::JoinHandle;

use super::App;
use crate::domain::DashboardError;

impl App {
    pub(crate) fn spawn_connect(&self) -> JoinHandle<()> {
        let dashboard = self.dashboard.clone();
        spawn_unhandled("connect", async move { dashboard.connect().await })
    }

    pub(crate) fn spawn_refresh_balance(&self) -> JoinHandle<()> {
        let dashboard = self.dashboard.clone();
        spawn_unhandled("refresh_balance", async move {
            dashboard.refresh_balance().await
        })
    }

    pub(crate) fn spawn_fund(&self, amount: String) -> JoinHandle<()> {
        let dashboard = self.dashboard.clone();
        tokio::spawn(async move { dashboard.fund(&amount).await })
    }

    pub(crate) fn spawn_withdraw(&self) -> JoinHandle<()> {
        let dashboard = self.dashboard.clone();
        tokio::spawn(async move { dashboard.withdraw().await })
    }
}

fn spawn_unhandled<F>(action: &'static str, task: F) -> JoinHandle<()>
where
    F: Future<Output = Result<(), DashboardError>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = task.await {
            tracing::error!(action, "unhandled action failure: {e}");
        }
    })
}
