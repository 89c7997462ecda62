pub mod rpc;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One submitted entry in the portal feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The submitted GIF link
    pub link: String,
    /// Address of the account that submitted it, base58
    pub submitter: String,
    /// Authoritative upvote count from the program account
    pub upvotes: u64,
}

/// Full snapshot of the feed account as returned by a fetch
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    /// Running total kept by the program (not derived client-side)
    pub total_records: u64,
    pub records: Vec<Record>,
}

/// The remote program surface the client drives.
///
/// All four operations go against one pre-provisioned feed account; the
/// implementation owns transport, signing and commitment handling. Callers
/// treat every error as opaque - there is no retry logic behind this trait.
#[async_trait]
pub trait PortalService: Send + Sync {
    /// Fetch the full record list. Errors if the account does not exist.
    async fn fetch_feed(&self, feed_account: &str) -> Result<FeedSnapshot>;

    /// One-time creation of the feed account, paid by `owner`.
    async fn initialize_feed(&self, feed_account: &str, owner: &str) -> Result<()>;

    /// Append a new record with `owner` as submitter.
    async fn add_record(&self, feed_account: &str, owner: &str, link: &str) -> Result<()>;

    /// Upvote the record identified by (link, submitter).
    async fn upvote_record(&self, feed_account: &str, link: &str, submitter: &str) -> Result<()>;
}

pub use rpc::RpcPortalClient;
