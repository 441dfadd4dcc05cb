//! In-process stand-in for the LeetCode GraphQL endpoint.
//!
//! - `alice`: 42 solved, two recent submissions
//! - `bob`: 7 solved, one recent submission
//! - `mallory`: stats body with a non-numeric count
//! - `crash`: HTTP 500
//! - anyone else: `matchedUser: null`
use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub async fn spawn_upstream() -> String {
    let app = Router::new().route("/graphql", post(graphql_handler));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    format!("http://{address}/graphql")
}

/// Endpoint on a port nothing listens on.
pub async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{address}/graphql")
}

async fn graphql_handler(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let username = body["variables"]["username"].as_str().unwrap_or_default();
    let query = body["query"].as_str().unwrap_or_default();

    if username == "crash" {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "errors": [] })));
    }

    let data = if query.contains("recentAcSubmissionList") {
        json!({ "recentAcSubmissionList": recent(username) })
    } else {
        json!({ "matchedUser": matched_user(username) })
    };

    (StatusCode::OK, Json(json!({ "data": data })))
}

fn matched_user(username: &str) -> Value {
    let counts = match username {
        "alice" => json!([
            { "difficulty": "All", "count": 42, "submissions": 80 },
            { "difficulty": "Easy", "count": 30, "submissions": 50 },
            { "difficulty": "Medium", "count": 10, "submissions": 25 },
            { "difficulty": "Hard", "count": 2, "submissions": 5 },
        ]),
        "bob" => json!([
            { "difficulty": "All", "count": 7, "submissions": 9 },
            { "difficulty": "Easy", "count": 7, "submissions": 9 },
            { "difficulty": "Nightmare", "count": 1000, "submissions": 1 },
        ]),
        "mallory" => json!([{ "difficulty": "All", "count": "lots" }]),
        _ => return Value::Null,
    };

    json!({
        "username": username,
        "submitStats": { "acSubmissionNum": counts }
    })
}

fn recent(username: &str) -> Value {
    match username {
        "alice" => json!([
            submission("11", "Two Sum", "1700000300"),
            submission("12", "Add Two Numbers", "1700000100"),
        ]),
        "bob" => json!([submission("21", "Valid Parentheses", "1700000200")]),
        "mallory" => json!([submission("31", "Jump Game", "1700000400")]),
        _ => json!([]),
    }
}

fn submission(id: &str, title: &str, timestamp: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "timestamp": timestamp,
        "statusDisplay": "Accepted",
        "runtime": "1 ms",
        "memory": "2.1 MB",
        "lang": "rust"
    })
}
