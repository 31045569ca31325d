//! Production HTTP transport backed by `reqwest`.

use async_trait::async_trait;

use crate::error::{MarketError, MarketResult};
use crate::traits::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// [`HttpTransport`] implementation over a shared `reqwest::Client`.
///
/// No timeouts are configured: a hung call hangs the dependent state.
/// Adding a timeout/cancellation contract here is a known gap.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> MarketResult<HttpResponse> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| MarketError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| MarketError::Network(e.to_string()))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}
