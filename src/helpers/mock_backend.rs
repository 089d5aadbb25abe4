use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::Value;

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct BackendState {
    replies: Mutex<HashMap<(String, String), (StatusCode, Option<Value>)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// In-process stand-in for the places backend. Unknown routes answer 404.
#[derive(Clone)]
pub struct MockBackend {
    addr: SocketAddr,
    state: Arc<BackendState>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(BackendState::default());
        let application = Router::<Arc<BackendState>>::new()
            .fallback(record_and_reply)
            .with_state(state.clone());

        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(application.into_make_service());
        let addr = server.local_addr();
        tokio::spawn(server);

        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn reply(
        &self,
        method: Method,
        path: &str,
        status: StatusCode,
        body: Option<Value>,
    ) {
        self.state
            .replies
            .lock()
            .insert((method.to_string(), path.to_string()), (status, body));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    /// The single recorded request, failing the test if there were more or fewer.
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {:?}", requests);
        requests[0].clone()
    }
}

/// A base URL nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn record_and_reply(
    State(state): State<Arc<BackendState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(|q| q.to_string()),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string()),
        body: serde_json::from_slice(&body).ok(),
    };
    state.requests.lock().push(recorded);

    let reply = state
        .replies
        .lock()
        .get(&(method.to_string(), uri.path().to_string()))
        .cloned();

    match reply {
        Some((status, Some(body))) => (status, Json(body)).into_response(),
        Some((status, None)) => status.into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
