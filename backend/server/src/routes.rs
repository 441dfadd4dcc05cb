use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use bank::{BankError, RecentSubmission, export};
use tracing::error;

use crate::{error::AppError, state::AppState};

/// Current snapshot, byte for byte.
pub async fn data_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = state.store().read_raw().map_err(|e| match e {
        BankError::SnapshotMissing(_) => AppError::NotFound("Leaderboard data not available yet."),
        e => {
            error!("Error reading snapshot: {e}");
            AppError::Internal("Error reading leaderboard data.")
        }
    })?;

    Ok(([(CONTENT_TYPE, "application/json")], bytes))
}

pub async fn recent_submissions_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RecentSubmission>>, AppError> {
    let feed = state.refresher.recent_feed().await.map_err(|e| {
        error!("Error fetching recent submissions: {e}");
        AppError::Internal("Error fetching recent submissions.")
    })?;

    if feed.is_empty() {
        return Err(AppError::NotFound("No recent submissions found."));
    }

    Ok(Json(feed))
}

pub async fn export_csv_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let csv = state
        .store()
        .read()
        .and_then(|records| export::to_csv(&records))
        .map_err(|e| {
            error!("Error exporting to CSV: {e}");
            AppError::Internal("Error exporting to CSV.")
        })?;

    let disposition = format!("attachment; filename=\"{}\"", export::CSV_FILE_NAME);

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}
