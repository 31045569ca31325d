//! Core client library for the Admarkt classifieds marketplace.
//!
//! Four pieces with real contracts live here; everything visual sits on
//! top of them in the UI layer:
//!
//! - [`wire`]: snake_case wire payloads are rewritten to camelCase before
//!   they reach the domain model.
//! - [`api`]: the REST client for the backend-of-record (listings,
//!   taxonomy, token exchange), with bearer injection and typed errors.
//! - [`auth`]: the session synchronizer bridging identity-provider session
//!   events to local state and the persisted credential.
//! - [`store`]: publish/subscribe caches (listings + taxonomy, session)
//!   consumed by presentation code through watch subscriptions.
//!
//! External dependencies sit behind the capability traits in [`traits`];
//! [`mocks`] provides test doubles for all of them.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod marketplace;
pub mod storage;
pub mod store;
pub mod traits;
pub mod transport;
pub mod wire;

#[cfg(any(test, feature = "test-support"))]
pub mod mocks;

pub use api::ApiClient;
pub use auth::{Session, SessionState, SessionSynchronizer};
pub use error::{IdentityError, MarketError, MarketResult};
pub use marketplace::{Category, City, Listing, ListingFilters, NewListing, UserProfile};
pub use storage::FileCredentialStore;
pub use store::{ListingSnapshot, ListingStore, SessionStore};
pub use traits::{
    CredentialStore, HttpMethod, HttpRequest, HttpResponse, HttpTransport, IdentityProvider,
    ProviderProfile, SessionEvent,
};
pub use transport::ReqwestTransport;
pub use wire::normalize_keys;
