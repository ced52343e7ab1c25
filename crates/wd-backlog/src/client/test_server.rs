//! In-process fake Backlog server for client tests.

use std::sync::{Arc, Mutex};

use axum::Router;

use super::WikiClient;
use crate::config::ClientConfig;

/// A request seen by the fake server.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub(crate) route: &'static str,
    pub(crate) query: Option<String>,
    pub(crate) body: String,
}

impl RecordedRequest {
    /// Decoded query parameters in request order.
    pub(crate) fn params(&self) -> Vec<(String, String)> {
        self.query
            .as_deref()
            .map(|q| serde_urlencoded::from_str(q).unwrap())
            .unwrap_or_default()
    }

    /// First decoded value of query parameter `name`.
    pub(crate) fn param(&self, name: &str) -> Option<String> {
        self.params()
            .into_iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

/// Shared log of requests, cloned into route handlers.
#[derive(Debug, Clone, Default)]
pub(crate) struct Recorder {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl Recorder {
    pub(crate) fn record(&self, route: &'static str, query: Option<String>, body: String) {
        self.requests
            .lock()
            .unwrap()
            .push(RecordedRequest { route, query, body });
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests recorded for `route`.
    pub(crate) fn count(&self, route: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.route == route)
            .count()
    }
}

/// Serve `router` on an ephemeral localhost port, returning its base URL.
///
/// The server thread lives until the test process exits.
pub(crate) fn spawn(router: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, router).await.unwrap();
        });
    });

    format!("http://{addr}")
}

/// Client for wiki 123 on `base_url` with a 24-character key.
pub(crate) fn test_client(base_url: &str) -> WikiClient {
    WikiClient::new(ClientConfig::new(base_url, "k".repeat(24), "123")).unwrap()
}
