//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for managing application
//! settings with load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/fundboard/config.json`
//! - macOS: `~/Library/Application Support/fundboard/config.json`
//! - Windows: `%APPDATA%/fundboard/config.json`
//!
//! Command line flags are layered on top with [`AppConfig::with_overrides`].

use alloy_primitives::Address;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::http::DEFAULT_TIMEOUT_SECS;
use crate::domain::DEFAULT_CONTRACT_ADDRESS;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
pub const APP_NAME: &str = "fundboard";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Default wallet endpoint (the local RPC port desktop wallets commonly expose).
pub const DEFAULT_WALLET_URL: &str = "http://127.0.0.1:1248";

/// Default receipt poll interval in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 4_000;

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Wallet JSON-RPC endpoint. `None` or empty means no wallet.
    pub wallet_url: Option<String>,
    /// Address of the funding contract.
    pub contract_address: Address,
    /// Interval between receipt polls.
    pub poll_interval_ms: u64,
    /// Timeout for a single wallet request.
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            wallet_url: Some(DEFAULT_WALLET_URL.to_string()),
            contract_address: DEFAULT_CONTRACT_ADDRESS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub wallet_url: Option<String>,
    pub no_wallet: bool,
    pub contract_address: Option<Address>,
    pub poll_interval_ms: Option<u64>,
}

impl AppConfig {
    /// Returns the directory holding the configuration and log files.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_dir() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Loads the configuration from disk.
    ///
    /// If the configuration file doesn't exist or cannot be parsed,
    /// returns the default configuration.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Loads the configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its JSON cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to disk and returns the path written.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot
    /// be written.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Saves the configuration to a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Applies command line overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.wallet_url {
            self.wallet_url = Some(url);
        }
        if overrides.no_wallet {
            self.wallet_url = None;
        }
        if let Some(address) = overrides.contract_address {
            self.contract_address = address;
        }
        if let Some(ms) = overrides.poll_interval_ms {
            self.poll_interval_ms = ms;
        }
        self
    }

    /// The wallet endpoint, if one is configured.
    #[must_use]
    pub fn wallet_endpoint(&self) -> Option<&str> {
        self.wallet_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// ============================================================================
// Tests
// ============================================================================
