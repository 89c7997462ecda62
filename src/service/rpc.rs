use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::Config;

use super::{FeedSnapshot, PortalService, Record};

// API response models

#[derive(Debug, Deserialize)]
struct FeedResponse {
    #[serde(rename = "totalRecords")]
    total_records: Option<u64>,
    records: Option<Vec<RecordItem>>,
}

#[derive(Debug, Deserialize)]
struct RecordItem {
    link: String,
    submitter: String,
    upvotes: Option<u64>,
}

#[derive(Debug, Serialize)]
struct InitializeRequest<'a> {
    owner: &'a str,
}

#[derive(Debug, Serialize)]
struct AddRecordRequest<'a> {
    owner: &'a str,
    link: &'a str,
}

#[derive(Debug, Serialize)]
struct UpvoteRequest<'a> {
    link: &'a str,
    submitter: &'a str,
}

/// HTTP client for the portal gateway.
///
/// The gateway exposes the program's instructions as plain JSON endpoints
/// under `/v1/programs/{program}/accounts/{account}`. Transaction assembly
/// and signing happen gateway-side; this client only passes addresses.
pub struct RpcPortalClient {
    http_client: HttpClient,
    endpoint: String,
    program_id: String,
    commitment: String,
}

impl RpcPortalClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: HttpClient::new(),
            endpoint: config.cluster.endpoint.trim_end_matches('/').to_string(),
            program_id: config.program.program_id.clone(),
            commitment: config.cluster.commitment.clone(),
        }
    }

    fn account_url(&self, feed_account: &str, suffix: &str) -> String {
        format!(
            "{}/v1/programs/{}/accounts/{}{}",
            self.endpoint, self.program_id, feed_account, suffix
        )
    }
}

#[async_trait]
impl PortalService for RpcPortalClient {
    async fn fetch_feed(&self, feed_account: &str) -> Result<FeedSnapshot> {
        let url = self.account_url(feed_account, "");
        tracing::debug!(%url, "fetching feed account");

        let response = self
            .http_client
            .get(&url)
            .query(&[("commitment", self.commitment.as_str())])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(anyhow!("Feed account {} does not exist", feed_account));
        }
        if !response.status().is_success() {
            return Err(anyhow!("Feed fetch failed: HTTP {}", response.status()));
        }

        let body: FeedResponse = response.json().await?;
        let records = body
            .records
            .unwrap_or_default()
            .into_iter()
            .map(|item| Record {
                link: item.link,
                submitter: item.submitter,
                upvotes: item.upvotes.unwrap_or(0),
            })
            .collect();

        Ok(FeedSnapshot {
            total_records: body.total_records.unwrap_or(0),
            records,
        })
    }

    async fn initialize_feed(&self, feed_account: &str, owner: &str) -> Result<()> {
        let url = self.account_url(feed_account, "/initialize");
        tracing::debug!(%url, %owner, "initializing feed account");

        let response = self
            .http_client
            .post(&url)
            .query(&[("commitment", self.commitment.as_str())])
            .json(&InitializeRequest { owner })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("Initialize failed: HTTP {}", response.status()));
        }
        Ok(())
    }

    async fn add_record(&self, feed_account: &str, owner: &str, link: &str) -> Result<()> {
        let url = self.account_url(feed_account, "/records");
        tracing::debug!(%url, %owner, "submitting record");

        let response = self
            .http_client
            .post(&url)
            .query(&[("commitment", self.commitment.as_str())])
            .json(&AddRecordRequest { owner, link })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("Record submit failed: HTTP {}", response.status()));
        }
        Ok(())
    }

    async fn upvote_record(&self, feed_account: &str, link: &str, submitter: &str) -> Result<()> {
        let url = self.account_url(feed_account, "/records/upvote");
        tracing::debug!(%url, "upvoting record");

        let response = self
            .http_client
            .post(&url)
            .query(&[("commitment", self.commitment.as_str())])
            .json(&UpvoteRequest { link, submitter })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("Upvote failed: HTTP {}", response.status()));
        }
        Ok(())
    }
}
