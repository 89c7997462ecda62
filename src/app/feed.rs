//! Feed synchronization and mutation.
//!
//! The feed is only ever replaced wholesale with a freshly fetched snapshot,
//! sorted ascending by upvotes. Mutations (initialize, submit, upvote) never
//! patch local state - they re-fetch on success so the displayed counts are
//! always the program's authoritative ones.

use super::{App, FeedState};

impl App {
    /// Fetch the full feed snapshot and replace local state with it.
    ///
    /// Any fetch failure collapses to [`FeedState::Uninitialized`]; the
    /// common cause is that the feed account was never created, and the UI
    /// then offers one-time initialization instead of an empty list.
    pub async fn refresh_feed(&mut self) {
        if self.wallet_address.is_none() {
            return;
        }

        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        let feed_account = self.config.program.feed_account.clone();

        let result = self.service.fetch_feed(&feed_account).await;

        // A newer fetch finished while this one was in flight
        if seq <= self.last_applied_fetch {
            self.add_debug("Discarding stale feed response".to_string());
            return;
        }
        self.last_applied_fetch = seq;

        match result {
            Ok(snapshot) => {
                let mut records = snapshot.records;
                // Stable: equal upvote counts keep their fetched order
                records.sort_by_key(|r| r.upvotes);

                self.add_debug(format!(
                    "Fetched feed: {} records (total counter {})",
                    records.len(),
                    snapshot.total_records
                ));

                if self.selected_record >= records.len() {
                    self.selected_record = records.len().saturating_sub(1);
                }
                self.feed = FeedState::Loaded(records);
            }
            Err(e) => {
                self.add_debug(format!("Error fetching feed: {}", e));
                self.feed = FeedState::Uninitialized;
            }
        }
    }

    /// One-time creation of the feed account.
    pub async fn initialize_feed(&mut self) {
        let Some(owner) = self.wallet_address.clone() else {
            return;
        };
        let feed_account = self.config.program.feed_account.clone();

        match self.service.initialize_feed(&feed_account, &owner).await {
            Ok(()) => {
                self.add_debug(format!("Created feed account {}", feed_account));
                self.refresh_feed().await;
            }
            Err(e) => {
                self.set_status_error(format!("Error creating feed account: {}", e));
            }
        }
    }

    /// Submit the drafted link as a new record.
    ///
    /// The draft is cleared before the call goes out and is not restored on
    /// failure; the user sees the result of the write only through the
    /// re-fetch that follows a successful submit.
    pub async fn submit_link(&mut self) {
        if self.submit.draft.is_empty() {
            self.add_debug("No link entered".to_string());
            return;
        }

        let link = std::mem::take(&mut self.submit.draft);
        self.submit.is_active = false;

        let Some(owner) = self.wallet_address.clone() else {
            return;
        };
        let feed_account = self.config.program.feed_account.clone();

        self.add_debug(format!("Submitting link: {}", link));

        match self.service.add_record(&feed_account, &owner, &link).await {
            Ok(()) => {
                self.add_debug("Link submitted to program".to_string());
                self.refresh_feed().await;
            }
            Err(e) => {
                self.set_status_error(format!("Error submitting link: {}", e));
            }
        }
    }

    /// Upvote the record at `index` in the displayed feed.
    pub async fn upvote_record(&mut self, index: usize) {
        let Some((link, submitter)) = self
            .feed
            .records()
            .and_then(|records| records.get(index))
            .map(|r| (r.link.clone(), r.submitter.clone()))
        else {
            return;
        };
        let feed_account = self.config.program.feed_account.clone();

        match self
            .service
            .upvote_record(&feed_account, &link, &submitter)
            .await
        {
            Ok(()) => {
                self.add_debug(format!("Upvoted {}", link));
                self.refresh_feed().await;
            }
            Err(e) => {
                self.set_status_error(format!("Error upvoting record: {}", e));
            }
        }
    }
}
