//! Wallet access for the portal client.
//!
//! The controller never reaches for an ambient wallet handle; it is handed a
//! [`WalletProvider`] at construction. The production implementation is
//! [`KeypairWallet`], backed by a JSON wallet file in the user config dir.
//! Key custody and transaction signing stay inside the wallet/gateway; the
//! client only ever learns the public address.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Grants (or refuses) access to the user's public address.
///
/// `connect(true)` is the silent variant used on startup: it must only
/// succeed if the user has previously approved automatic connection.
/// `connect(false)` is the explicit, user-triggered variant.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Whether a wallet is present at all (file installed, extension found, ...)
    fn is_available(&self) -> bool;

    /// Request the wallet's public address.
    async fn connect(&self, silent: bool) -> Result<String>;
}

/// On-disk wallet file contents.
#[derive(Debug, Serialize, Deserialize)]
pub struct WalletFile {
    /// Public address, base58
    pub address: String,
    /// User has approved connecting without being asked
    #[serde(default)]
    pub auto_connect: bool,
}

/// File-backed wallet provider.
pub struct KeypairWallet {
    path: PathBuf,
}

impl KeypairWallet {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default wallet file location
    pub fn default_path() -> Result<PathBuf> {
        let mut path = config_dir()
            .ok_or_else(|| anyhow!("Could not find config directory"))?;
        path.push("gifport");
        fs::create_dir_all(&path)?;
        path.push("wallet.json");
        Ok(path)
    }

    fn load_file(&self) -> Result<WalletFile> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read wallet file {}", self.path.display()))?;
        let wallet: WalletFile = serde_json::from_str(&contents)
            .context("Failed to parse wallet file")?;
        Ok(wallet)
    }
}

#[async_trait]
impl WalletProvider for KeypairWallet {
    fn is_available(&self) -> bool {
        self.path.exists()
    }

    async fn connect(&self, silent: bool) -> Result<String> {
        if !self.is_available() {
            return Err(anyhow!(
                "No wallet file at {} - create one to connect",
                self.path.display()
            ));
        }

        let wallet = self.load_file()?;

        if silent && !wallet.auto_connect {
            tracing::debug!(path = %self.path.display(), "wallet found but auto_connect not approved");
            return Err(anyhow!("Wallet has not approved automatic connection"));
        }

        tracing::debug!(address = %wallet.address, silent, "wallet connected");
        Ok(wallet.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_wallet(dir: &tempfile::TempDir, auto_connect: bool) -> PathBuf {
        let path = dir.path().join("wallet.json");
        let contents = serde_json::to_string_pretty(&WalletFile {
            address: "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin".to_string(),
            auto_connect,
        })
        .unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let wallet = KeypairWallet::new(dir.path().join("nope.json"));
        assert!(!wallet.is_available());
    }

    #[tokio::test]
    async fn test_connect_fails_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let wallet = KeypairWallet::new(dir.path().join("nope.json"));
        assert!(wallet.connect(false).await.is_err());
    }

    #[tokio::test]
    async fn test_silent_connect_requires_approval() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_wallet(&dir, false);
        let wallet = KeypairWallet::new(path);

        assert!(wallet.is_available());
        assert!(wallet.connect(true).await.is_err());

        // Explicit connect still works
        let address = wallet.connect(false).await.unwrap();
        assert_eq!(address, "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin");
    }

    #[tokio::test]
    async fn test_silent_connect_with_approval() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_wallet(&dir, true);
        let wallet = KeypairWallet::new(path);

        let address = wallet.connect(true).await.unwrap();
        assert_eq!(address, "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin");
    }

    #[tokio::test]
    async fn test_garbage_wallet_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        fs::write(&path, "not json at all").unwrap();

        let wallet = KeypairWallet::new(path);
        assert!(wallet.connect(false).await.is_err());
    }
}
