use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::{Result, anyhow, bail};
use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub roster_dir: PathBuf,
    pub snapshot_path: PathBuf,
    pub public_dir: PathBuf,
    pub graphql_url: String,
    pub fetch_concurrency: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config = Self {
            port: try_load("RUST_PORT", "3001")?,
            roster_dir: try_load("ROSTER_DIR", ".")?,
            snapshot_path: try_load("SNAPSHOT_PATH", bank::snapshot::DEFAULT_SNAPSHOT_PATH)?,
            public_dir: try_load("PUBLIC_DIR", "public")?,
            graphql_url: try_load("LEETCODE_GRAPHQL_URL", process::models::ENDPOINT)?,
            fetch_concurrency: try_load("FETCH_CONCURRENCY", "16")?,
        };

        if config.fetch_concurrency == 0 {
            bail!("FETCH_CONCURRENCY must be at least 1");
        }

        Ok(config)
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .map_err(|_| {
            warn!("Environment variable {key} not found, using default");
        })
        .ok()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| anyhow!("Invalid {key} value {raw:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_used_when_unset() {
        let port: u16 = try_load("LEADERBOARD_TEST_UNSET_PORT", "3001").unwrap();

        assert_eq!(port, 3001);
    }

    #[test]
    fn test_invalid_default_rejected() {
        let result: Result<u16> = try_load("LEADERBOARD_TEST_UNSET_PORT", "not-a-port");

        assert!(result.is_err());
    }
}
