//! # Leaderboard Processing
//!
//! Logic behind a refresh cycle.
//!
//! ## Refresh Cycle
//! 1. Load the roster. If rolls, names, URLs and sections disagree in length, stop here
//!    and leave the previous snapshot alone.
//!
//! 2. For every student, check the profile URL. Only `https://leetcode.com/u/<name>` URLs
//!    resolve to a username, everyone else is marked `No LeetCode data available`.
//!
//! 3. Fetch stats and recent submissions for every resolved username. Fetches run
//!    concurrently, capped at the configured limit. A failed fetch resolves to zeroed
//!    stats, so one bad profile only delays the cycle.
//!
//! 4. Rank by total solved, highest first.
//!
//! 5. Replace the snapshot in one rename.
//!
//! ## Recent Feed
//! Bypasses the snapshot: re-reads rolls and profile URLs only, fetches recent
//! submissions live and flattens them newest first. The other roster files are
//! neither read nor length-checked here.
use std::{cmp::Reverse, sync::Arc, time::Instant};

use bank::{
    BankError, LeaderboardRecord, RecentSubmission, RosterEntry, RosterPaths, SnapshotStore,
    load_profile_urls, load_roster, profile_username, rank,
};
use indicatif::ProgressBar;
use thiserror::Error;
use tokio::{sync::Semaphore, task::JoinSet};
use tracing::{error, info};

pub mod client;
pub mod models;
pub mod utils;

#[cfg(test)]
mod fake;

pub use client::{StatsClient, UserStats};

pub const DEFAULT_CONCURRENCY: usize = 16;

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error(transparent)]
    Bank(#[from] BankError),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    pub records: usize,
    pub resolved: usize,
    pub unresolved: usize,
}

pub struct Refresher {
    client: StatsClient,
    roster: RosterPaths,
    store: SnapshotStore,
    concurrency: usize,
    progress: Option<ProgressBar>,
}

impl Refresher {
    pub fn new(client: StatsClient, roster: RosterPaths, store: SnapshotStore) -> Self {
        Self {
            client,
            roster,
            store,
            concurrency: DEFAULT_CONCURRENCY,
            progress: None,
        }
    }

    /// Caps in-flight profile fetches. Values below 1 are raised to 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    pub async fn refresh(&self) -> Result<RefreshSummary, RefreshError> {
        let started = Instant::now();

        let roster = load_roster(&self.roster).inspect_err(|e| {
            error!("Error: {e}. Keeping previous snapshot.");
        })?;

        let entries = roster.entries();
        info!("Loaded roster: {} students", entries.len());

        if let Some(progress) = &self.progress {
            progress.set_length(entries.len() as u64);
        }

        let mut records = self.collect_records(entries).await;
        rank(&mut records);

        self.store.write(&records)?;

        let resolved = records.iter().filter(|r| r.profile.is_some()).count();
        let summary = RefreshSummary {
            records: records.len(),
            resolved,
            unresolved: records.len() - resolved,
        };

        info!(
            "Data saved to {} successfully: {} records, {} with LeetCode data, took {:.1?}",
            self.store.path().display(),
            summary.records,
            summary.resolved,
            started.elapsed()
        );

        Ok(summary)
    }

    pub async fn recent_feed(&self) -> Result<Vec<RecentSubmission>, RefreshError> {
        let usernames: Vec<String> = load_profile_urls(&self.roster)?
            .iter()
            .filter_map(|url| profile_username(url))
            .map(str::to_string)
            .collect();

        let limiter = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        for username in usernames {
            let client = self.client.clone();
            let limiter = limiter.clone();

            tasks.spawn(async move {
                let _permit = limiter.acquire_owned().await;
                let submissions = client.fetch_recent_submissions(&username).await;

                submissions
                    .into_iter()
                    .map(|submission| RecentSubmission {
                        username: username.clone(),
                        title: submission.title,
                        timestamp: submission.timestamp,
                    })
                    .collect::<Vec<_>>()
            });
        }

        let mut feed = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(items) => feed.extend(items),
                Err(e) => error!("Recent submission task failed: {e}"),
            }
        }

        feed.sort_by_key(|item| Reverse(item.epoch_seconds()));

        Ok(feed)
    }

    async fn collect_records(&self, entries: Vec<RosterEntry>) -> Vec<LeaderboardRecord> {
        let limiter = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();
        let total = entries.len();

        for entry in entries {
            let client = self.client.clone();
            let limiter = limiter.clone();
            let progress = self.progress.clone();

            tasks.spawn(async move {
                let record = match entry.profile_username().map(str::to_string) {
                    Some(username) => {
                        let _permit = limiter.acquire_owned().await;
                        let UserStats {
                            stats,
                            recent_submissions,
                        } = client.fetch_user_stats(&username).await;

                        LeaderboardRecord::with_profile(entry, username, stats, recent_submissions)
                    }
                    None => LeaderboardRecord::without_profile(entry),
                };

                if let Some(progress) = progress {
                    progress.inc(1);
                }

                record
            });
        }

        let mut records = Vec::with_capacity(total);
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(record) => records.push(record),
                Err(e) => error!("Profile task failed: {e}"),
            }
        }

        records
    }
}
