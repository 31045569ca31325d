//! HTTP transport abstraction for testable network operations.

use async_trait::async_trait;

use crate::error::MarketResult;

/// HTTP method subset used by the marketplace API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully-built request handed to the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL, query string included.
    pub url: String,
    /// Bearer token for the `Authorization` header, when present.
    pub bearer: Option<String>,
    /// JSON body for POST requests.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            bearer: None,
            body: None,
        }
    }

    #[must_use]
    pub fn bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    #[must_use]
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A raw response as seen by the transport: status plus unparsed body.
///
/// Interpretation (ok-ness, error-message extraction, normalization) is the
/// API client's job, not the transport's.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the transport layer considers this response a success.
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Abstraction over the HTTP transport.
///
/// This trait enables testing of network-dependent code without requiring
/// an actual server. Transport-level failures (connect, DNS, TLS) surface
/// as `Err`; any response with a status, success or not, is `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> MarketResult<HttpResponse>;
}
