#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::Value;

use marine_tracker_client::session::SessionService;
use marine_tracker_client::ApiGateway;

/// One request as the stub backend saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct StubState {
    routes: HashMap<(String, String), (u16, String)>,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<StubState>>;

/// In-process backend double. Every request is recorded; responses are
/// scripted per method and path, anything unscripted answers 404.
pub struct StubBackend {
    pub port: u16,
    pub base_url: String,
    state: Shared,
}

impl StubBackend {
    pub async fn start() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);
        let state: Shared = Arc::default();

        let app = Router::new().fallback(record).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind stub backend on {}", port))?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { port, base_url, state })
    }

    /// Answer `method path` with `status` and a JSON body
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    /// Answer `method path` with `status` and a raw body
    pub fn respond_raw(&self, method: &str, path: &str, status: u16, body: &str) {
        self.state
            .lock()
            .unwrap()
            .routes
            .insert((method.to_uppercase(), path.to_string()), (status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("stub backend received no requests")
    }

    pub fn gateway(&self, session: Arc<SessionService>) -> Arc<ApiGateway> {
        Arc::new(ApiGateway::new(&self.base_url, session).expect("stub base url is valid"))
    }
}

async fn record(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let request = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: serde_json::from_slice(&body).ok(),
    };

    let mut state = state.lock().unwrap();
    let scripted = state
        .routes
        .get(&(request.method.clone(), request.path.clone()))
        .cloned();
    state.requests.push(request);

    match scripted {
        Some((status, body)) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, [(header::CONTENT_TYPE, "application/json")], r#"{"detail":"Not Found"}"#)
            .into_response(),
    }
}

/// A base URL nothing is listening on
pub fn unreachable_base_url() -> String {
    let port = portpicker::pick_unused_port().expect("failed to pick free port");
    format!("http://127.0.0.1:{}", port)
}

pub fn signed_in_session(token: &str) -> Arc<SessionService> {
    let session = SessionService::in_memory();
    session.start(token, true).expect("in-memory session accepts tokens");
    Arc::new(session)
}

pub fn profile_json(first_name: &str) -> Value {
    serde_json::json!({
        "id": 7,
        "first_name": first_name,
        "last_name": "Hansen",
        "email": "erik.hansen@example.com",
        "job_title": "Chief Officer",
        "skills": ["ECDIS"],
        "certificates": [1, 2]
    })
}

pub fn document_json(id: i64, archived: bool) -> Value {
    serde_json::json!({
        "id": id,
        "docID": format!("DOC-{}", id),
        "doc": "",
        "docType": "Passport",
        "category": "Identity",
        "status": "VALID",
        "expiry": "2030-01-01",
        "docName": "passport.png",
        "issueDate": "2024-01-01T00:00:00Z",
        "uploadDate": "2024-01-02T00:00:00Z",
        "hidden": false,
        "archived": archived
    })
}
