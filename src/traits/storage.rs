//! Durable credential storage abstraction.

use crate::error::MarketResult;

/// A single durable slot holding the bearer credential.
///
/// The slot is keyed by a fixed name ([`crate::config::CREDENTIAL_SLOT`]):
/// written on sign-in, overwritten on every token refresh, removed on
/// sign-out. Operations are synchronous; implementations are expected to
/// be cheap (a small file or an in-memory cell).
pub trait CredentialStore: Send + Sync {
    /// Store the token, replacing any previous value.
    fn put(&self, token: &str) -> MarketResult<()>;

    /// The currently stored token, if any.
    fn get(&self) -> Option<String>;

    /// Remove the stored token. Removing an empty slot is not an error.
    fn delete(&self) -> MarketResult<()>;
}
