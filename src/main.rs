use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::Address;
use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tokio::sync::mpsc;

mod client;
mod commands;
mod constants;
mod domain;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::{
    client::{HttpConfig, JsonRpcWallet, ReceiptWatcher, WalletProvider},
    domain::Notification,
    logging::LogTarget,
    state::{App, AppConfig, ConfigOverrides, Dashboard},
};

/// fundboard - fund and withdraw from a smart contract through your wallet
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Wallet JSON-RPC endpoint (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    wallet_url: Option<String>,

    /// Run as if no wallet were available
    #[arg(long, global = true, conflicts_with = "wallet_url")]
    no_wallet: bool,

    /// Address of the funding contract
    #[arg(long, global = true, value_name = "ADDRESS")]
    contract: Option<Address>,

    /// Interval between receipt polls, in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    poll_interval_ms: Option<u64>,

    /// Subcommand to run instead of the interactive dashboard
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Request account access from the wallet
    Connect,
    /// Print the contract balance
    Balance,
    /// Fund the contract with an amount in ether
    Fund {
        /// Amount in ether, e.g. 0.1
        amount: String,
    },
    /// Withdraw the contract balance (owner only)
    Withdraw,
    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    logging::init(log_target(cli.command.as_ref()))?;

    let config = AppConfig::load().with_overrides(ConfigOverrides {
        wallet_url: cli.wallet_url,
        no_wallet: cli.no_wallet,
        contract_address: cli.contract,
        poll_interval_ms: cli.poll_interval_ms,
    });

    match cli.command {
        Some(command) => run_headless(command, config).await,
        None => run_tui(config).await,
    }
}

/// The TUI owns the terminal, so only headless runs log to stderr.
fn log_target(command: Option<&Commands>) -> LogTarget {
    match command {
        Some(_) => LogTarget::Stderr,
        None => LogTarget::File,
    }
}

/// Builds the wallet client, or `None` when no endpoint is configured.
fn build_wallet(config: &AppConfig) -> Result<Option<Arc<dyn WalletProvider>>> {
    let Some(url) = config.wallet_endpoint() else {
        tracing::info!("no wallet endpoint configured");
        return Ok(None);
    };
    let http = HttpConfig::with_timeout(config.request_timeout());
    let wallet = JsonRpcWallet::new(url, http).map_err(|e| e.into_report())?;
    tracing::info!(url = wallet.url(), "using wallet endpoint");
    Ok(Some(Arc::new(wallet)))
}

async fn run_tui(config: AppConfig) -> Result<()> {
    let wallet = build_wallet(&config)?;
    let mut app = App::new(config, wallet);

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;
    result
}

/// Runs a single dashboard action without the TUI, printing notifications
/// as they arrive.
async fn run_headless(command: Commands, config: AppConfig) -> Result<()> {
    if let Commands::Config { save } = command {
        println!("{}", serde_json::to_string_pretty(&config)?);
        if save {
            let path = config.save()?;
            println!("Saved to {}", path.display());
        }
        return Ok(());
    }

    let wallet = build_wallet(&config)?;
    let (notification_tx, mut notification_rx) = mpsc::unbounded_channel::<Notification>();
    let dashboard = Dashboard::new(wallet.clone(), config.contract_address, notification_tx);

    let _watcher = wallet.map(|wallet| {
        ReceiptWatcher::spawn(
            dashboard.confirmations().clone(),
            wallet,
            config.poll_interval(),
        )
    });

    let printer = tokio::spawn(async move {
        while let Some(notification) = notification_rx.recv().await {
            println!("{notification}");
        }
    });

    match command {
        Commands::Connect => dashboard.connect().await.map_err(|e| e.into_report())?,
        Commands::Balance => {
            dashboard
                .refresh_balance()
                .await
                .map_err(|e| e.into_report())?;
            println!("Smart Contract Balance: {} ETH", dashboard.balance().get());
        }
        Commands::Fund { amount } => dashboard.fund(&amount).await,
        Commands::Withdraw => dashboard.withdraw().await,
        Commands::Config { .. } => {}
    }

    // Closing the last sender ends the printer once the queue is flushed.
    drop(dashboard);
    tokio::time::timeout(Duration::from_secs(1), printer).await??;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::tui(&["fundboard"], LogTarget::File)]
    #[case::headless(&["fundboard", "balance"], LogTarget::Stderr)]
    #[case::config(&["fundboard", "config", "--save"], LogTarget::Stderr)]
    fn test_log_target_follows_command(#[case] args: &[&str], #[case] expected: LogTarget) {
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(log_target(cli.command.as_ref()), expected);
    }

    #[test]
    fn test_global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fundboard",
            "fund",
            "0.5",
            "--no-wallet",
            "--poll-interval-ms",
            "250",
        ])
        .unwrap();
        assert!(cli.no_wallet);
        assert_eq!(cli.poll_interval_ms, Some(250));
        assert!(matches!(cli.command, Some(Commands::Fund { ref amount }) if amount == "0.5"));
    }

    #[test]
    fn test_no_wallet_conflicts_with_wallet_url() {
        assert!(
            Cli::try_parse_from(["fundboard", "--no-wallet", "--wallet-url", "http://x"]).is_err()
        );
    }
}
