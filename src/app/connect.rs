//! Wallet connection handling.
//!
//! Two entry points, matching how a wallet grants access: a silent attempt
//! on startup that only succeeds if the user already approved automatic
//! connection, and an explicit attempt triggered by the connect key. Once
//! set, the address never transitions back to absent within a session.

use super::App;

impl App {
    /// Silent connect attempt, run once before the first render.
    ///
    /// Failures here are normal (no wallet, or no prior approval) and are
    /// only logged - the UI stays on the not-connected view.
    pub async fn connect_on_startup(&mut self) {
        if !self.wallet.is_available() {
            self.add_debug("No wallet found - create a wallet file to connect".to_string());
            return;
        }

        match self.wallet.connect(true).await {
            Ok(address) => {
                self.add_debug(format!("Connected with address: {}", address));
                self.wallet_address = Some(address);
                self.refresh_feed().await;
            }
            Err(e) => {
                self.add_debug(format!("Silent connect skipped: {}", e));
            }
        }
    }

    /// Explicit, user-triggered connect.
    pub async fn connect_wallet(&mut self) {
        if self.is_connected() {
            return;
        }

        if !self.wallet.is_available() {
            self.set_status_error("No wallet found - create a wallet file to connect".to_string());
            return;
        }

        match self.wallet.connect(false).await {
            Ok(address) => {
                self.add_debug(format!("Connected with address: {}", address));
                self.set_status_info("Wallet connected".to_string());
                self.wallet_address = Some(address);
                self.refresh_feed().await;
            }
            Err(e) => {
                self.set_status_error(format!("Wallet connect failed: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::testing::{app_with, connected_app, record, FakeService, FakeWallet};
    use crate::app::FeedState;

    #[tokio::test]
    async fn test_silent_connect_requires_trust() {
        let service = FakeService::with_feed(vec![]);
        let mut app = app_with(FakeWallet::default(), service.clone());

        app.connect_on_startup().await;

        assert!(app.wallet_address.is_none());
        assert_eq!(app.feed, FeedState::NotLoaded);
        // No fetch without a connection
        assert_eq!(service.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_silent_connect_when_trusted() {
        let service = FakeService::with_feed(vec![]);
        let wallet = FakeWallet {
            trusted: true,
            ..FakeWallet::default()
        };
        let mut app = app_with(wallet, service.clone());

        app.connect_on_startup().await;

        assert_eq!(app.wallet_address.as_deref(), Some("FakeWa11etAddre55"));
        // Connecting triggers exactly one fetch
        assert_eq!(service.fetch_count(), 1);
        assert_eq!(app.feed, FeedState::Loaded(vec![]));
    }

    #[tokio::test]
    async fn test_explicit_connect_sets_address_and_fetches() {
        let service = FakeService::with_feed(vec![record("a", "x", 0)]);
        let mut app = app_with(FakeWallet::default(), service.clone());

        app.connect_wallet().await;

        assert!(app.is_connected());
        assert_eq!(service.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_wallet_is_not_fatal() {
        let service = FakeService::default();
        let wallet = FakeWallet {
            available: false,
            ..FakeWallet::default()
        };
        let mut app = app_with(wallet, service.clone());

        app.connect_on_startup().await;
        app.connect_wallet().await;

        assert!(app.wallet_address.is_none());
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_address_never_reverts() {
        // Every follow-up failure leaves the address in place
        let service = FakeService::default();
        service.state.lock().unwrap().fail_fetch = true;
        let mut app = connected_app(service.clone());

        app.refresh_feed().await;
        app.initialize_feed().await;
        app.submit.draft = "https://example.com/a.gif".to_string();
        app.submit_link().await;
        app.upvote_record(0).await;
        app.connect_wallet().await;

        assert!(app.is_connected());
    }
}
