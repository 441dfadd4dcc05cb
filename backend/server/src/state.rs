use std::sync::Arc;

use bank::{RosterPaths, SnapshotStore};
use process::{Refresher, StatsClient};

use super::config::Config;

pub struct AppState {
    pub config: Config,
    pub refresher: Refresher,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let refresher = Refresher::new(
            StatsClient::new(config.graphql_url.clone()),
            RosterPaths::in_dir(&config.roster_dir),
            SnapshotStore::new(&config.snapshot_path),
        )
        .with_concurrency(config.fetch_concurrency);

        Arc::new(Self { config, refresher })
    }

    pub fn store(&self) -> &SnapshotStore {
        self.refresher.store()
    }
}
