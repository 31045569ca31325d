//! Bridges identity-provider session events to local session state.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::config;
use crate::error::IdentityError;
use crate::marketplace::UserProfile;
use crate::traits::{CredentialStore, HttpTransport, IdentityProvider, ProviderProfile, SessionEvent};

use super::session::{Session, SessionState};

/// Synchronizes the identity provider's session with local state.
///
/// Listens to provider session events, owns the persisted bearer
/// credential, and reconciles provider profile data with the
/// backend-of-record record. A backend outage must never block
/// authentication with the provider: the exchange failure path still
/// yields a signed-in session built from provider data alone.
pub struct SessionSynchronizer<H: HttpTransport> {
    provider: Arc<dyn IdentityProvider>,
    credentials: Arc<dyn CredentialStore>,
    api: Arc<ApiClient<H>>,
    state_tx: watch::Sender<SessionState>,
}

impl<H: HttpTransport> SessionSynchronizer<H> {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        credentials: Arc<dyn CredentialStore>,
        api: Arc<ApiClient<H>>,
    ) -> Self {
        let (state_tx, _) = watch::channel(SessionState::default());
        Self {
            provider,
            credentials,
            api,
            state_tx,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to state transitions. Observers see each published state
    /// whole; there is no intermediate state where, say, the credential is
    /// gone but the session still set.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Handle a session-change notification from the identity provider.
    pub async fn on_session_event(&self, event: SessionEvent) {
        match event {
            SessionEvent::SignedIn(profile) => self.sync_signed_in(profile).await,
            SessionEvent::SignedOut => self.clear_session(),
        }
    }

    async fn sync_signed_in(&self, profile: ProviderProfile) {
        self.state_tx.send_replace(SessionState::Syncing);

        let token = match self.provider.fresh_token().await {
            Ok(token) => token,
            Err(e) => {
                // No usable token: no credential is persisted and no
                // session can be built.
                warn!("Failed to obtain provider token: {}", e);
                self.state_tx.send_replace(SessionState::Degraded);
                return;
            }
        };

        if let Err(e) = self.credentials.put(&token) {
            warn!("Failed to persist credential: {}", e);
        }

        let session = match self.api.sync_user(&token).await {
            Ok(user) => {
                info!("Synced user {} with backend", user.id);
                Self::merge_session(&profile, Some(user))
            }
            Err(e) => {
                // Non-fatal by contract: fall back to provider data.
                warn!("Backend sync failed, using provider profile: {}", e);
                Self::merge_session(&profile, None)
            }
        };

        self.state_tx.send_replace(SessionState::SignedIn(session));
    }

    /// Sign-out and expiry path: credential and session are cleared before
    /// the single SignedOut transition is published.
    fn clear_session(&self) {
        if let Err(e) = self.credentials.delete() {
            warn!("Failed to remove credential: {}", e);
        }
        self.state_tx.send_replace(SessionState::SignedOut);
        info!("Session cleared");
    }

    /// Merge provider and backend profile data, preferring the backend,
    /// falling back to the provider, then to fixed defaults.
    fn merge_session(profile: &ProviderProfile, backend: Option<UserProfile>) -> Session {
        let (backend_id, backend_name, backend_avatar) = match backend {
            Some(user) => (Some(user.id), Some(user.full_name), Some(user.avatar_url)),
            None => (None, None, None),
        };
        Session {
            subject_id: backend_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| profile.uid.clone()),
            display_name: backend_name
                .filter(|n| !n.is_empty())
                .or_else(|| profile.display_name.clone())
                .unwrap_or_else(|| config::DEFAULT_DISPLAY_NAME.to_string()),
            avatar_url: backend_avatar
                .filter(|a| !a.is_empty())
                .or_else(|| profile.avatar_url.clone())
                .unwrap_or_else(|| config::DEFAULT_AVATAR_URL.to_string()),
        }
    }

    /// Delegate sign-in to the provider. Session state is populated by the
    /// session listener, not here.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), IdentityError> {
        self.provider.sign_in(email, password).await
    }

    /// Delegate sign-up to the provider. As with sign-in, the listener
    /// finishes populating state; a backend outage does not fail sign-up.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<(), IdentityError> {
        self.provider.sign_up(email, password, full_name).await
    }

    /// Sign out of the provider. The listener clears credential and
    /// session when the provider emits the SignedOut event.
    pub async fn sign_out(&self) -> Result<(), IdentityError> {
        self.provider.sign_out().await
    }

    /// Edit the in-memory session profile.
    ///
    /// Known limitation: the change is not persisted to the backend; it
    /// survives only until the next session event.
    pub fn update_profile(&self, display_name: Option<String>, avatar_url: Option<String>) {
        self.state_tx.send_if_modified(|state| {
            let SessionState::SignedIn(session) = state else {
                return false;
            };
            if let Some(name) = display_name {
                session.display_name = name;
            }
            if let Some(avatar) = avatar_url {
                session.avatar_url = avatar;
            }
            true
        });
    }
}
