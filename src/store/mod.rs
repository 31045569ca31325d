//! Shared application state containers.
//!
//! Two independent publish/subscribe caches consumed by presentation code:
//! listings plus taxonomy, and the session. Both publish whole snapshots
//! through `watch` channels so the UI layer can subscribe without ever
//! observing a half-applied update.

pub mod listings;
pub mod session;

pub use listings::{ListingSnapshot, ListingStore};
pub use session::SessionStore;
