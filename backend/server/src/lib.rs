//! LeetCode leaderboard for a class roster.
//!
//!
//!
//! # General Infrastructure
//! - Roster lives in five plain text files next to the binary (or in `ROSTER_DIR`)
//! - Every hour, stats for every student are pulled from the LeetCode GraphQL API
//! - The ranked result is written to `data.json`, which every read endpoint serves from
//! - The frontend is a static site served out of `public/`
//!
//!
//!
//! # Endpoints
//! - `GET /data`: the snapshot as persisted, 404 before the first refresh lands
//! - `GET /recent-submissions`: live feed of latest accepted submissions, newest first,
//!   404 when nobody has any
//! - `GET /export-csv`: the snapshot as `leaderboard.csv`
//! - anything else: static files
//!
//!
//!
//! # Configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `RUST_PORT` | `3001` |
//! | `ROSTER_DIR` | `.` |
//! | `SNAPSHOT_PATH` | `data.json` |
//! | `PUBLIC_DIR` | `public` |
//! | `LEETCODE_GRAPHQL_URL` | `https://leetcode.com/graphql` |
//! | `FETCH_CONCURRENCY` | `16` |
//!
//! Logging through `RUST_LOG`, e.g. `RUST_LOG=info`.
//!
//!
//!
//! # Setup
//!
//! Run the server.
//! ```sh
//! RUST_LOG=info cargo run -p leaderboard
//! ```
//!
//! One-off refresh without the server.
//! ```sh
//! cargo run -p process -- --roster-dir . --snapshot data.json
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::Result;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod scheduler;
pub mod state;

use config::Config;
use routes::{data_handler, export_csv_handler, recent_submissions_handler};
use scheduler::spawn_refresh_loop;
use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/data", get(data_handler))
        .route("/recent-submissions", get(recent_submissions_handler))
        .route("/export-csv", get(export_csv_handler))
        .fallback_service(ServeDir::new(&state.config.public_dir))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new(Config::load()?);

    info!("Scheduling refresh every {:?}", scheduler::REFRESH_INTERVAL);
    let refresh_loop = spawn_refresh_loop(state.clone());

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server is running at http://{address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    refresh_loop.abort();
    info!("Server shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
