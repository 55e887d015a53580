//! In-process HTTP server standing in for LeetCode and GitHub in tests

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// A request as seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Value,
}

struct MockState {
    status: StatusCode,
    response: Value,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Answers every request with a fixed status and JSON body
pub struct MockServer {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockServer {
    pub async fn start(status: StatusCode, response: Value) -> Self {
        let state = Arc::new(MockState {
            status,
            response,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .fallback(record_handler)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("requests lock").clone()
    }
}

async fn record_handler(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);

    state
        .requests
        .lock()
        .expect("requests lock")
        .push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            headers,
            body,
        });

    (state.status, Json(state.response.clone()))
}

/// Base URL of a local port with nothing listening on it
pub async fn unused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind unused port");
    let addr = listener.local_addr().expect("unused port address");
    drop(listener);
    format!("http://{addr}")
}

/// GraphQL response for "42. Trapping Rain Water"
pub fn daily_question_json() -> Value {
    json!({
        "data": {
            "activeDailyCodingChallengeQuestion": {
                "date": "2026-10-18",
                "link": "/problems/trapping-rain-water/",
                "question": {
                    "acRate": 55.321,
                    "content": "<p>Given <code>n</code> non-negative integers...</p>",
                    "difficulty": "Hard",
                    "frontendQuestionId": "42",
                    "title": "Trapping Rain Water",
                    "titleSlug": "trapping-rain-water",
                    "topicTags": [{ "name": "Array", "id": "VG9waWNUYWdOb2RlOjU=", "slug": "array" }]
                }
            }
        }
    })
}

/// Successful create-issue response
pub fn created_issue_json(number: u64, title: &str) -> Value {
    json!({
        "id": 1,
        "number": number,
        "title": title,
        "state": "open",
        "html_url": format!("https://github.com/octo/daily/issues/{number}")
    })
}
