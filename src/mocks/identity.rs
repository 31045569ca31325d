//! Mock identity provider for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::sync::mpsc;

use crate::error::IdentityError;
use crate::traits::{IdentityProvider, ProviderProfile, SessionEvent};

#[derive(Debug, Clone)]
struct Account {
    password: String,
    profile: ProviderProfile,
}

/// Scripted identity provider.
///
/// Accounts are registered up front or created through `sign_up`; session
/// events are emitted on the channel returned by [`take_events`]
/// (MockIdentity::take_events). Clones share state.
#[derive(Clone)]
pub struct MockIdentity {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    active: Arc<RwLock<Option<ProviderProfile>>>,
    token: Arc<RwLock<String>>,
    fail_token: Arc<RwLock<bool>>,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
    events_rx: Arc<RwLock<Option<mpsc::UnboundedReceiver<SessionEvent>>>>,
}

impl MockIdentity {
    pub fn new() -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            active: Arc::new(RwLock::new(None)),
            token: Arc::new(RwLock::new("provider-token-1".to_string())),
            fail_token: Arc::new(RwLock::new(false)),
            events_tx,
            events_rx: Arc::new(RwLock::new(Some(events_rx))),
        }
    }

    /// Take the session-event stream. Yields `None` after the first call.
    ///
    /// Per the [`IdentityProvider`] contract the stream opens with the
    /// current session state, so a listener attached before any sign-in
    /// still receives an initial `SignedOut`.
    pub fn take_events(&self) -> Option<mpsc::UnboundedReceiver<SessionEvent>> {
        let rx = self.events_rx.write().take();
        if rx.is_some() {
            let initial = match self.active.read().clone() {
                Some(profile) => SessionEvent::SignedIn(profile),
                None => SessionEvent::SignedOut,
            };
            let _ = self.events_tx.send(initial);
        }
        rx
    }

    /// Register an existing account.
    pub fn add_account(&self, email: &str, password: &str, profile: ProviderProfile) {
        self.accounts.write().insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                profile,
            },
        );
    }

    /// Set the token handed out by `fresh_token`.
    pub fn set_token(&self, token: &str) {
        *self.token.write() = token.to_string();
    }

    /// Make `fresh_token` fail, as when the provider is unreachable.
    pub fn set_fail_token(&self, fail: bool) {
        *self.fail_token.write() = fail;
    }

    /// Emit a raw session event, bypassing sign-in. Used to simulate token
    /// refreshes and session expiry.
    pub fn emit(&self, event: SessionEvent) {
        let _ = self.events_tx.send(event);
    }

    /// The profile of the currently signed-in account, if any.
    pub fn active_profile(&self) -> Option<ProviderProfile> {
        self.active.read().clone()
    }
}

impl Default for MockIdentity {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), IdentityError> {
        let profile = {
            let accounts = self.accounts.read();
            let account = accounts.get(email).ok_or(IdentityError::UserNotFound)?;
            if account.password != password {
                return Err(IdentityError::WrongPassword);
            }
            account.profile.clone()
        };

        *self.active.write() = Some(profile.clone());
        self.emit(SessionEvent::SignedIn(profile));
        Ok(())
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<(), IdentityError> {
        if !email.contains('@') {
            return Err(IdentityError::InvalidEmail);
        }
        if password.len() < 6 {
            return Err(IdentityError::WeakPassword);
        }
        if self.accounts.read().contains_key(email) {
            return Err(IdentityError::EmailAlreadyInUse);
        }

        let profile = ProviderProfile {
            uid: format!("uid-{email}"),
            display_name: Some(display_name.to_string()),
            avatar_url: None,
        };
        self.add_account(email, password, profile.clone());

        *self.active.write() = Some(profile.clone());
        self.emit(SessionEvent::SignedIn(profile));
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        *self.active.write() = None;
        self.emit(SessionEvent::SignedOut);
        Ok(())
    }

    async fn fresh_token(&self) -> Result<String, IdentityError> {
        if *self.fail_token.read() {
            return Err(IdentityError::Unavailable("simulated token failure".into()));
        }
        // No active-session check: tests that emit events manually still
        // need a token for the refresh path.
        Ok(self.token.read().clone())
    }
}
