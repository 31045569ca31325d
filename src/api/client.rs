//! The single point of contact with the marketplace REST API.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::info;
use url::Url;

use crate::error::{MarketError, MarketResult};
use crate::marketplace::{Category, City, Listing, ListingFilters, NewListing, UserProfile};
use crate::traits::{CredentialStore, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::wire::normalize_keys;

/// REST client for the marketplace backend.
///
/// Owns request construction, bearer-header injection and response
/// interpretation. It never mutates shared state itself; that is the
/// calling store's responsibility.
pub struct ApiClient<H: HttpTransport> {
    transport: H,
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
}

impl<H: HttpTransport> ApiClient<H> {
    pub fn new(
        transport: H,
        base_url: impl Into<String>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Fetch the city taxonomy.
    pub async fn cities(&self) -> MarketResult<Vec<City>> {
        let response = self.get(&self.endpoint("/cities", &[])?).await?;
        Self::decode(response)
    }

    /// Fetch the category taxonomy.
    pub async fn categories(&self) -> MarketResult<Vec<Category>> {
        let response = self.get(&self.endpoint("/categories", &[])?).await?;
        Self::decode(response)
    }

    /// Fetch listings, optionally filtered. Filtering is server-side; this
    /// call only forwards the parameters.
    pub async fn listings(&self, filters: &ListingFilters) -> MarketResult<Vec<Listing>> {
        let url = self.endpoint("/ads", &filters.query_pairs())?;
        let response = self.get(&url).await?;
        Self::decode(response)
    }

    /// Fetch a single listing by id. A 404 is absence, not an error.
    pub async fn listing(&self, id: i64) -> MarketResult<Option<Listing>> {
        let url = self.endpoint(&format!("/ads/{id}"), &[])?;
        let response = self.get(&url).await?;
        if response.status == 404 {
            return Ok(None);
        }
        Self::decode(response).map(Some)
    }

    /// Create a listing. Requires a stored credential; fails fast locally
    /// when there is none, avoiding a round trip guaranteed to be rejected.
    ///
    /// On server rejection the raw response text is surfaced so the user
    /// sees exactly what the backend complained about.
    pub async fn create_listing(&self, ad: &NewListing) -> MarketResult<Listing> {
        let token = self.credentials.get().ok_or(MarketError::AuthRequired)?;

        let body = serde_json::to_value(ad)
            .map_err(|e| MarketError::Serialization(format!("Failed to encode listing: {e}")))?;
        let request = HttpRequest::new(HttpMethod::Post, self.endpoint("/ads", &[])?)
            .bearer(Some(token))
            .json(body);
        let response = self.transport.execute(request).await?;

        if !response.is_ok() {
            let text = String::from_utf8_lossy(&response.body).into_owned();
            return Err(MarketError::Http {
                status: response.status,
                message: format!("Failed to create ad: {} - {}", response.status, text),
            });
        }

        let listing: Listing = Self::decode(response)?;
        info!("Created listing '{}' (id {})", listing.title, listing.id);
        Ok(listing)
    }

    /// Delete a listing by id. The server answers 204 on success.
    pub async fn delete_listing(&self, id: i64) -> MarketResult<()> {
        let url = self.endpoint(&format!("/ads/{id}"), &[])?;
        let request = HttpRequest::new(HttpMethod::Delete, url).bearer(self.credentials.get());
        let response = self.transport.execute(request).await?;

        if !response.is_ok() && response.status != 204 {
            return Err(Self::http_error(&response));
        }
        info!("Deleted listing {}", id);
        Ok(())
    }

    /// Fetch the current user's own listings.
    pub async fn my_listings(&self) -> MarketResult<Vec<Listing>> {
        let url = self.endpoint("/users/me/ads", &[])?;
        let response = self.get(&url).await?;
        Self::decode(response)
    }

    /// Exchange an identity-provider token for the backend-of-record user
    /// profile, creating the account on first contact.
    pub async fn sync_user(&self, token: &str) -> MarketResult<UserProfile> {
        let request = HttpRequest::new(HttpMethod::Post, self.endpoint("/auth/sync", &[])?)
            .json(serde_json::json!({ "token": token }));
        let response = self.transport.execute(request).await?;
        Self::decode(response)
    }

    /// GET with the bearer header attached when a credential is stored.
    /// Absence is not pre-checked: the server decides what needs auth.
    async fn get(&self, url: &str) -> MarketResult<HttpResponse> {
        let request = HttpRequest::new(HttpMethod::Get, url).bearer(self.credentials.get());
        self.transport.execute(request).await
    }

    fn endpoint(&self, path: &str, query: &[(&'static str, String)]) -> MarketResult<String> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| MarketError::Network(format!("Invalid URL for {path}: {e}")))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url.into())
    }

    /// Interpret a response: reject non-success statuses, then normalize
    /// the payload keys before typed deserialization.
    fn decode<T: DeserializeOwned>(response: HttpResponse) -> MarketResult<T> {
        if !response.is_ok() {
            return Err(Self::http_error(&response));
        }
        let value: serde_json::Value = serde_json::from_slice(&response.body)
            .map_err(|e| MarketError::Serialization(format!("Invalid JSON in response: {e}")))?;
        serde_json::from_value(normalize_keys(value))
            .map_err(|e| MarketError::Serialization(format!("Unexpected response shape: {e}")))
    }

    /// Build the error for a non-success response: the body's `message`
    /// field when parseable, else a generic message with the status.
    fn http_error(response: &HttpResponse) -> MarketError {
        let message = serde_json::from_slice::<serde_json::Value>(&response.body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or_else(|| format!("HTTP error! status: {}", response.status));
        MarketError::Http {
            status: response.status,
            message,
        }
    }
}
