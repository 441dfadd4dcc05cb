//! # LeetCode Client
//!
//! Two GraphQL queries per tracked user:
//! - aggregate accepted counts by difficulty
//! - the latest accepted submissions (limit 3)
//!
//! A failing profile never fails the batch. Any network error, non-2xx status,
//! unknown user or malformed body is logged and answered with zeroed stats and
//! no submissions.
use bank::{Stats, Submission};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    models::{RecentSubmissionsData, Response, UserStatsData},
    utils::{build_recent_payload, build_stats_payload},
};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No matched user for {0}")]
    MissingUser(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserStats {
    pub stats: Stats,
    pub recent_submissions: Vec<Submission>,
}

#[derive(Clone, Debug)]
pub struct StatsClient {
    client: Client,
    endpoint: String,
}

impl StatsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub async fn fetch_user_stats(&self, username: &str) -> UserStats {
        match self.try_fetch_user_stats(username).await {
            Ok(user_stats) => user_stats,
            Err(e) => {
                warn!("Error fetching data for {username}: {e}");
                UserStats::default()
            }
        }
    }

    pub async fn fetch_recent_submissions(&self, username: &str) -> Vec<Submission> {
        match self.query_recent(username).await {
            Ok(submissions) => submissions,
            Err(e) => {
                warn!("Error fetching recent submissions for {username}: {e}");
                Vec::new()
            }
        }
    }

    async fn try_fetch_user_stats(&self, username: &str) -> Result<UserStats, FetchError> {
        let (stats, recent_submissions) =
            tokio::try_join!(self.query_stats(username), self.query_recent(username))?;

        debug!("{username}: {} solved", stats.total_solved);

        Ok(UserStats {
            stats,
            recent_submissions,
        })
    }

    async fn query_stats(&self, username: &str) -> Result<Stats, FetchError> {
        let data: UserStatsData = self.post(&build_stats_payload(username)).await?;

        data.matched_user
            .map(|user| user.submit_stats.to_stats())
            .ok_or_else(|| FetchError::MissingUser(username.to_string()))
    }

    async fn query_recent(&self, username: &str) -> Result<Vec<Submission>, FetchError> {
        let data: RecentSubmissionsData = self.post(&build_recent_payload(username)).await?;

        Ok(data.recent_ac_submission_list.unwrap_or_default())
    }

    async fn post<T: DeserializeOwned>(
        &self,
        payload: &serde_json::Value,
    ) -> Result<T, FetchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Response<T>>().await?.data)
    }
}
