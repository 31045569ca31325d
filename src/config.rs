//! Configuration constants for the marketplace client.
//!
//! This module centralizes fixed paths, slot names and fallback values
//! to improve maintainability and enable easier tuning.

/// Default base URL for the marketplace REST API.
///
/// All endpoints live under this path (`/cities`, `/ads`, `/auth/sync`, ...).
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "ADMARKT_API_URL";

/// Name of the durable slot holding the bearer credential.
///
/// Written on sign-in, overwritten on every provider token refresh and
/// removed on sign-out.
pub const CREDENTIAL_SLOT: &str = "authToken";

/// Display name used when neither the backend nor the identity provider
/// supplies one.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Avatar used when neither the backend nor the identity provider
/// supplies one.
pub const DEFAULT_AVATAR_URL: &str = "https://picsum.photos/seed/user1/100/100";

/// Resolve the API base URL from the environment, falling back to the
/// development default.
pub fn base_url() -> String {
    std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}
