//! # Bank
//!
//! Everything the leaderboard keeps on disk.
//!
//! ## Inputs
//! - Five line-oriented roster files, one field per line, aligned by index:
//!   `roll.txt`, `name.txt`, `urls.txt`, `sections.txt`, `day.txt`
//!
//! ## Outputs
//! - `data.json`: pretty-printed array of leaderboard records ranked by total solved,
//!   replaced wholesale every refresh
//! - CSV rendering of that same array for downloads
use std::{io, path::PathBuf};

use thiserror::Error;

pub mod export;
pub mod records;
pub mod roster;
pub mod snapshot;

pub use records::{LeaderboardRecord, RecentSubmission, RosterEntry, Stats, Submission, rank};
pub use roster::{Roster, RosterPaths, load_profile_urls, load_roster, profile_username};
pub use snapshot::SnapshotStore;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Snapshot {} does not exist yet", .0.display())]
    SnapshotMissing(PathBuf),

    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error(
        "The number of rolls ({rolls}), names ({names}), URLs ({urls}), and sections ({sections}) do not match"
    )]
    RosterMismatch {
        rolls: usize,
        names: usize,
        urls: usize,
        sections: usize,
    },
}

impl BankError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
