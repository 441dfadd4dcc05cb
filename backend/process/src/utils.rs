use serde_json::json;

use crate::models::{RECENT_SUBMISSION_LIMIT, RECENT_SUBMISSIONS_QUERY, USER_STATS_QUERY};

pub fn build_stats_payload(username: &str) -> serde_json::Value {
    json!({
        "query": USER_STATS_QUERY,
        "variables": { "username": username }
    })
}

pub fn build_recent_payload(username: &str) -> serde_json::Value {
    json!({
        "query": RECENT_SUBMISSIONS_QUERY,
        "variables": { "username": username, "limit": RECENT_SUBMISSION_LIMIT }
    })
}
