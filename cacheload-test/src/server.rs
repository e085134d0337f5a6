//! Exposes an in-process target server for use in integration tests.
//!
//! ```
//! use cacheload_test::server::TestServer;
//!
//! #[tokio::main]
//! async fn main() {
//!    let server = TestServer::new().await;
//!    let host = server.host();
//!    // run a load test against the host, then inspect `server.requests()`...
//! }
//! ```

use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::Router;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Uri};
use axum::response::IntoResponse;
use axum::routing;
use bytes::Bytes;
use serde_json::json;

pub use axum::http::{Method, StatusCode};

/// A request received by the [`TestServer`].
#[derive(Clone, Debug)]
pub struct ReceivedRequest {
    /// The request method.
    pub method: Method,
    /// The request path, without query.
    pub path: String,
    /// The value of the `content-type` header, if present.
    pub content_type: Option<String>,
    /// The full request body.
    pub body: Bytes,
    /// When the server started handling the request.
    pub received_at: Instant,
}

#[derive(Debug, Default)]
struct Received {
    requests: Vec<ReceivedRequest>,
    /// Body of the most recent request. Each request replaces the previous one.
    cached_body: Option<Bytes>,
}

#[derive(Clone, Debug)]
struct TargetState {
    received: Arc<Mutex<Received>>,
    status: StatusCode,
    delay: Duration,
}

/// An in-process target server for use in integration tests.
///
/// The server accepts `GET /cache` with any body and records every request it receives. It
/// listens on a random available port on localhost and stops when dropped.
#[derive(Debug)]
pub struct TestServer {
    handle: tokio::task::JoinHandle<()>,
    socket: SocketAddr,
    received: Arc<Mutex<Received>>,
}

impl TestServer {
    /// Starts a server that answers every request with `200 OK`.
    pub async fn new() -> Self {
        Self::with_status(StatusCode::OK).await
    }

    /// Starts a server that answers every request with the given status.
    pub async fn with_status(status: StatusCode) -> Self {
        Self::start(status, Duration::ZERO).await
    }

    /// Starts a server that records every request right away but holds back each response for
    /// `delay`.
    pub async fn with_delay(delay: Duration) -> Self {
        Self::start(StatusCode::OK, delay).await
    }

    async fn start(status: StatusCode, delay: Duration) -> Self {
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = TcpListener::bind(addr).unwrap();
        listener.set_nonblocking(true).unwrap();
        let socket = listener.local_addr().unwrap();

        let received = Arc::new(Mutex::new(Received::default()));
        let state = TargetState {
            received: received.clone(),
            status,
            delay,
        };
        let router = Router::new()
            .route("/cache", routing::get(cache))
            .with_state(state);

        let handle = tokio::spawn(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            handle,
            socket,
            received,
        }
    }

    /// Returns the base URL of the server, to be used as load test host.
    pub fn host(&self) -> String {
        format!("http://{}", self.socket)
    }

    /// Returns a full URL pointing to the given path.
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.host(), path)
    }

    /// Returns all requests received so far, in order of arrival.
    pub fn requests(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().requests.clone()
    }

    /// Returns the number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.received.lock().unwrap().requests.len()
    }

    /// Returns the body of the most recently received request.
    pub fn cached_body(&self) -> Option<Bytes> {
        self.received.lock().unwrap().cached_body.clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn cache(
    State(state): State<TargetState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let received_at = Instant::now();
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let received_len = body.len();
    tracing::trace!(%method, %uri, received_len, "received request");

    {
        let mut received = state.received.lock().unwrap();
        received.cached_body = Some(body.clone());
        received.requests.push(ReceivedRequest {
            method,
            path: uri.path().to_owned(),
            content_type,
            body,
            received_at,
        });
    }

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (state.status, axum::Json(json!({ "received": received_len })))
}

/// Returns a host URL on localhost on which no server is listening.
///
/// The port is taken from a listener that is closed right away, so connections to it are refused.
pub fn unreachable_host() -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    format!("http://127.0.0.1:{port}")
}
