pub mod state;
mod connect;
mod feed;

use std::collections::VecDeque;

use crate::config::Config;
use crate::service::PortalService;
use crate::wallet::WalletProvider;

pub use state::{FeedState, StatusMessage, SubmitState};

pub struct App {
    // Session state
    pub wallet_address: Option<String>,
    pub feed: FeedState,
    pub submit: SubmitState,
    pub selected_record: usize,

    // Injected collaborators
    pub(crate) wallet: Box<dyn WalletProvider>,
    pub(crate) service: Box<dyn PortalService>,

    // Fetch ordering guard: a response is only applied if no newer fetch
    // has been applied since it was issued
    pub(crate) fetch_seq: u64,
    pub(crate) last_applied_fetch: u64,

    // Diagnostics
    pub debug_log: VecDeque<String>,
    pub status_message: Option<StatusMessage>,
    pub show_debug: bool,

    // Configuration
    pub config: Config,
}

impl App {
    pub fn new(config: Config, wallet: Box<dyn WalletProvider>, service: Box<dyn PortalService>) -> Self {
        let mut debug_log = VecDeque::new();
        debug_log.push_back("Starting GIF portal client...".to_string());
        debug_log.push_back(format!("  Gateway: {}", config.cluster.endpoint));
        debug_log.push_back(format!("  Feed account: {}", config.program.feed_account));

        let show_debug = config.ui.show_debug;

        Self {
            wallet_address: None,
            feed: FeedState::NotLoaded,
            submit: SubmitState::default(),
            selected_record: 0,
            wallet,
            service,
            fetch_seq: 0,
            last_applied_fetch: 0,
            debug_log,
            status_message: None,
            show_debug,
            config,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet_address.is_some()
    }

    pub fn wallet_available(&self) -> bool {
        self.wallet.is_available()
    }

    pub fn add_debug(&mut self, msg: String) {
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/gifport-debug.log")
        {
            use std::io::Write;
            let timestamp = chrono::Local::now().format("%H:%M:%S");
            writeln!(file, "[{}] {}", timestamp, msg).ok();
        }

        self.debug_log.push_back(msg);
        while self.debug_log.len() > 100 {
            self.debug_log.pop_front();
        }
    }

    pub fn set_status_error(&mut self, msg: String) {
        self.status_message = Some(StatusMessage {
            message: msg.clone(),
            is_error: true,
            timestamp: std::time::Instant::now(),
        });
        self.add_debug(msg);
    }

    pub fn set_status_info(&mut self, msg: String) {
        self.status_message = Some(StatusMessage {
            message: msg,
            is_error: false,
            timestamp: std::time::Instant::now(),
        });
    }

    pub fn clear_expired_status(&mut self) {
        if let Some(ref msg) = self.status_message {
            if msg.timestamp.elapsed() > std::time::Duration::from_secs(5) {
                self.status_message = None;
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    use crate::config::Config;
    use crate::service::{FeedSnapshot, PortalService, Record};
    use crate::wallet::WalletProvider;

    use super::App;

    pub struct FakeWallet {
        pub address: String,
        pub available: bool,
        pub trusted: bool,
    }

    impl Default for FakeWallet {
        fn default() -> Self {
            Self {
                address: "FakeWa11etAddre55".to_string(),
                available: true,
                trusted: false,
            }
        }
    }

    #[async_trait]
    impl WalletProvider for FakeWallet {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn connect(&self, silent: bool) -> Result<String> {
            if !self.available {
                return Err(anyhow!("no wallet"));
            }
            if silent && !self.trusted {
                return Err(anyhow!("not trusted"));
            }
            Ok(self.address.clone())
        }
    }

    #[derive(Default)]
    pub struct FakeServiceState {
        /// None = account not created yet; Some = live feed contents
        pub feed: Option<Vec<Record>>,
        pub calls: Vec<String>,
        pub fail_fetch: bool,
        pub fail_add: bool,
        pub fail_upvote: bool,
        pub fail_initialize: bool,
    }

    /// In-memory stand-in for the remote program, shared with the test body
    /// so calls and feed contents can be inspected after operations run.
    #[derive(Clone, Default)]
    pub struct FakeService {
        pub state: Arc<Mutex<FakeServiceState>>,
    }

    impl FakeService {
        pub fn with_feed(records: Vec<Record>) -> Self {
            let service = Self::default();
            service.state.lock().unwrap().feed = Some(records);
            service
        }

        pub fn calls(&self) -> Vec<String> {
            self.state.lock().unwrap().calls.clone()
        }

        pub fn fetch_count(&self) -> usize {
            self.calls().iter().filter(|c| *c == "fetch").count()
        }
    }

    #[async_trait]
    impl PortalService for FakeService {
        async fn fetch_feed(&self, _feed_account: &str) -> Result<FeedSnapshot> {
            let mut state = self.state.lock().unwrap();
            state.calls.push("fetch".to_string());
            if state.fail_fetch {
                return Err(anyhow!("fetch failed"));
            }
            match &state.feed {
                Some(records) => Ok(FeedSnapshot {
                    total_records: records.len() as u64,
                    records: records.clone(),
                }),
                None => Err(anyhow!("account does not exist")),
            }
        }

        async fn initialize_feed(&self, _feed_account: &str, _owner: &str) -> Result<()> {
            let mut state = self.state.lock().unwrap();
            state.calls.push("initialize".to_string());
            if state.fail_initialize {
                return Err(anyhow!("initialize failed"));
            }
            state.feed = Some(Vec::new());
            Ok(())
        }

        async fn add_record(&self, _feed_account: &str, owner: &str, link: &str) -> Result<()> {
            let mut state = self.state.lock().unwrap();
            state.calls.push("add".to_string());
            if state.fail_add {
                return Err(anyhow!("add failed"));
            }
            let record = Record {
                link: link.to_string(),
                submitter: owner.to_string(),
                upvotes: 0,
            };
            state
                .feed
                .as_mut()
                .ok_or_else(|| anyhow!("account does not exist"))?
                .push(record);
            Ok(())
        }

        async fn upvote_record(&self, _feed_account: &str, link: &str, submitter: &str) -> Result<()> {
            let mut state = self.state.lock().unwrap();
            state.calls.push("upvote".to_string());
            if state.fail_upvote {
                return Err(anyhow!("upvote failed"));
            }
            let feed = state
                .feed
                .as_mut()
                .ok_or_else(|| anyhow!("account does not exist"))?;
            for record in feed.iter_mut() {
                if record.link == link && record.submitter == submitter {
                    record.upvotes += 1;
                }
            }
            Ok(())
        }
    }

    pub fn test_config() -> Config {
        let mut config = Config::default();
        config.program.feed_account = "TestFeedAccount".to_string();
        config
    }

    pub fn app_with(wallet: FakeWallet, service: FakeService) -> App {
        App::new(test_config(), Box::new(wallet), Box::new(service))
    }

    pub fn connected_app(service: FakeService) -> App {
        let mut app = app_with(FakeWallet::default(), service);
        app.wallet_address = Some("FakeWa11etAddre55".to_string());
        app
    }

    pub fn record(link: &str, submitter: &str, upvotes: u64) -> Record {
        Record {
            link: link.to_string(),
            submitter: submitter.to_string(),
            upvotes,
        }
    }
}
