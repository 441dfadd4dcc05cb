//! # Refresh Schedule
//!
//! One refresh at startup, then one every hour. Each tick spawns its own task,
//! so a cycle that outlives the interval overlaps the next one instead of
//! delaying it. Snapshot writes are atomic renames, the last writer wins.
use std::{sync::Arc, time::Duration};

use tokio::{task::JoinHandle, time::interval};
use tracing::{error, info};

use crate::state::AppState;

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

pub fn spawn_refresh_loop(state: Arc<AppState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(REFRESH_INTERVAL);

        loop {
            ticker.tick().await;
            tokio::spawn(run_refresh(state.clone()));
        }
    })
}

pub async fn run_refresh(state: Arc<AppState>) {
    info!("Refreshing leaderboard...");

    match state.refresher.refresh().await {
        Ok(summary) => info!(
            "Refresh complete: {} records ({} without LeetCode data)",
            summary.records, summary.unresolved
        ),
        Err(e) => error!("Error processing data: {e}"),
    }
}
