//! Mock HTTP transport for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{MarketError, MarketResult};
use crate::traits::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// A recorded request for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    /// Full URL as the client built it, query string included.
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Mock transport with a route table and recorded requests.
///
/// Routes are keyed by method and URL path (query ignored for matching);
/// unmatched requests answer 404. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockHttp {
    routes: Arc<RwLock<HashMap<(&'static str, String), HttpResponse>>>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
    fail_requests: Arc<RwLock<bool>>,
}

impl MockHttp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with a JSON body and the given status.
    pub fn stub_json(
        &self,
        method: HttpMethod,
        path: &str,
        status: u16,
        body: serde_json::Value,
    ) {
        let bytes = serde_json::to_vec(&body).unwrap_or_default();
        self.stub_raw(method, path, status, bytes);
    }

    /// Answer `method path` with raw bytes and the given status.
    pub fn stub_raw(&self, method: HttpMethod, path: &str, status: u16, body: Vec<u8>) {
        self.routes.write().insert(
            (method.as_str(), path.to_string()),
            HttpResponse { status, body },
        );
    }

    /// Make every request fail at the transport level.
    pub fn set_fail_requests(&self, fail: bool) {
        *self.fail_requests.write() = fail;
    }

    /// All requests seen so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().clone()
    }

    /// Number of requests seen so far.
    pub fn request_count(&self) -> usize {
        self.requests.read().len()
    }

    /// Requests that hit a given path.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests
            .read()
            .iter()
            .filter(|r| Self::path_of(&r.url) == path)
            .cloned()
            .collect()
    }

    /// Drop all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.write().clear();
    }

    fn path_of(url: &str) -> String {
        url::Url::parse(url)
            .map(|u| u.path().to_string())
            .unwrap_or_else(|_| url.to_string())
    }
}

#[async_trait]
impl HttpTransport for MockHttp {
    async fn execute(&self, request: HttpRequest) -> MarketResult<HttpResponse> {
        if *self.fail_requests.read() {
            return Err(MarketError::Network("simulated request failure".into()));
        }

        let path = Self::path_of(&request.url);
        self.requests.write().push(RecordedRequest {
            method: request.method,
            url: request.url.clone(),
            bearer: request.bearer.clone(),
            body: request.body.clone(),
        });

        let response = self
            .routes
            .read()
            .get(&(request.method.as_str(), path))
            .cloned()
            .unwrap_or(HttpResponse {
                status: 404,
                body: Vec::new(),
            });
        Ok(response)
    }
}
