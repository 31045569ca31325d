//! Identity-provider abstraction.
//!
//! The provider (an external service issuing session tokens and profile
//! data) is treated as an opaque capability: this crate defines the seam
//! and a mock, not a production integration.

use async_trait::async_trait;

use crate::error::IdentityError;

/// Profile data the identity provider attaches to an active session.
///
/// Everything except the subject id is optional; the session synchronizer
/// fills gaps from the backend-of-record or from fixed defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderProfile {
    pub uid: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// A session-change notification from the identity provider.
///
/// `SignedIn` fires on sign-in, sign-up and token refresh; `SignedOut`
/// fires on explicit sign-out and on session expiry. In addition, the
/// provider reports the current session state once, immediately upon
/// subscription: a signed-out start still produces an initial `SignedOut`,
/// so listeners can tell "checked, nobody home" from "not checked yet".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(ProviderProfile),
    SignedOut,
}

/// Abstraction over the external identity provider.
///
/// Sign-in and sign-up do not return the session directly: the provider
/// emits a [`SessionEvent`] on its notification stream and the session
/// synchronizer finishes populating local state from there. The stream
/// must open with the current session state (see [`SessionEvent`]); the
/// session container's readiness gate depends on that initial event.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), IdentityError>;

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<(), IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;

    /// Obtain a fresh bearer token for the currently active session.
    async fn fresh_token(&self) -> Result<String, IdentityError>;
}
