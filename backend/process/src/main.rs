use std::path::PathBuf;

use anyhow::Result;
use bank::{RosterPaths, SnapshotStore, snapshot::DEFAULT_SNAPSHOT_PATH};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use process::{DEFAULT_CONCURRENCY, Refresher, StatsClient, models::ENDPOINT};
use tracing_subscriber::{EnvFilter, fmt};

/// Runs a single refresh cycle and writes the snapshot.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Directory holding roll.txt, name.txt, urls.txt, sections.txt and day.txt
    #[arg(long, default_value = ".")]
    roster_dir: PathBuf,

    #[arg(long, default_value = DEFAULT_SNAPSHOT_PATH)]
    snapshot: PathBuf,

    #[arg(long, default_value = ENDPOINT)]
    endpoint: String,

    /// Max profiles fetched at once
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )?
        .progress_chars("=> "),
    );
    pb.set_message("Fetching profiles");

    let refresher = Refresher::new(
        StatsClient::new(args.endpoint),
        RosterPaths::in_dir(&args.roster_dir),
        SnapshotStore::new(&args.snapshot),
    )
    .with_concurrency(args.concurrency)
    .with_progress(pb.clone());

    let summary = refresher.refresh().await;
    pb.finish_with_message("Done");
    let summary = summary?;

    println!("Records: {}", summary.records);
    println!("With LeetCode data: {}", summary.resolved);
    println!("Without LeetCode data: {}", summary.unresolved);
    println!("Snapshot: {}", args.snapshot.display());

    Ok(())
}
