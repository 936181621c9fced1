//! In-process stand-in for the Chartmetric stat endpoint
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::{Path, RawQuery, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::get,
};

#[derive(Debug, Clone)]
pub struct Seen {
    pub id: String,
    pub source: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct FakeApi {
    status: StatusCode,
    body: &'static str,
    seen: Arc<Mutex<Vec<Seen>>>,
}

async fn stat(
    State(api): State<FakeApi>,
    Path((id, source)): Path<(String, String)>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> (StatusCode, &'static str) {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    api.seen.lock().unwrap().push(Seen {
        id,
        source,
        query,
        authorization,
    });
    (api.status, api.body)
}

// Serves the stat endpoint on an ephemeral port, returns its API root
pub async fn spawn_api(status: StatusCode, body: &'static str) -> (String, Arc<Mutex<Vec<Seen>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/api/artist/{id}/stat/{source}/", get(stat))
        .with_state(FakeApi {
            status,
            body,
            seen: seen.clone(),
        });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/api"), seen)
}

