use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::ui::Theme;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub cluster: ClusterConfig,
    pub program: ProgramConfig,
    pub wallet: WalletConfig,
    pub ui: UiConfig,
    pub theme: Theme,
}

/// Portal gateway connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// HTTP endpoint of the portal gateway
    pub endpoint: String,
    /// Commitment level forwarded with every request: "processed", "confirmed", "finalized"
    pub commitment: String,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8899".to_string(),
            commitment: "processed".to_string(),
        }
    }
}

/// On-chain program binding
///
/// The feed account is pre-provisioned: the client never derives or
/// generates it, it only reads the id from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    /// Program id the gateway routes instructions to
    pub program_id: String,
    /// Base account holding the record feed
    pub feed_account: String,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            program_id: "4mkC1jawAiSYRcmuhzpJdehMXmYkUwv5qctW2r7W6ttM".to_string(),
            feed_account: String::new(),
        }
    }
}

/// Wallet settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WalletConfig {
    /// Wallet file path (empty = default config dir location)
    pub wallet_file: Option<String>,
}

/// UI customization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    pub tick_interval_ms: u64,
    /// Show the debug panel on startup
    pub show_debug: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            show_debug: false,
        }
    }
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("gifport");

        fs::create_dir_all(&config_dir)
            .context("Failed to create config directory")?;

        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from file, or create default if not exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)
                .context("Failed to read config file")?;

            let config: Config = toml::from_str(&contents)
                .context("Failed to parse config file")?;

            Ok(config)
        } else {
            // Create default config and save it
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }
}
