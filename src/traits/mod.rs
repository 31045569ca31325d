//! Trait abstractions for dependency injection and testability.
//!
//! This module provides trait-based abstractions for external dependencies,
//! enabling unit testing without requiring actual network connections or an
//! identity-provider account.

pub mod http;
pub mod identity;
pub mod storage;

// Re-export all traits for crate-internal use.
// The public API surface is controlled by lib.rs re-exports.
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use identity::{IdentityProvider, ProviderProfile, SessionEvent};
pub use storage::CredentialStore;
