//! Session container: wraps the synchronizer and its event listener.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::warn;

use crate::auth::{Session, SessionState, SessionSynchronizer};
use crate::error::IdentityError;
use crate::traits::{HttpTransport, SessionEvent};

/// Application-scoped session state.
///
/// Wraps the [`SessionSynchronizer`] and drives it from the provider's
/// event stream. Dependents that must not render a flash of signed-out UI
/// wait on [`ready`](SessionStore::ready) before reading the session.
pub struct SessionStore<H: HttpTransport> {
    sync: Arc<SessionSynchronizer<H>>,
    ready_rx: watch::Receiver<bool>,
    ready_tx: Arc<watch::Sender<bool>>,
}

impl<H: HttpTransport + 'static> SessionStore<H> {
    pub fn new(sync: Arc<SessionSynchronizer<H>>) -> Self {
        let (ready_tx, ready_rx) = watch::channel(false);
        Self {
            sync,
            ready_rx,
            ready_tx: Arc::new(ready_tx),
        }
    }

    /// Spawn the listener task that forwards provider session events to
    /// the synchronizer.
    ///
    /// The first processed event marks the store ready; providers open
    /// their stream with the current session state, so a signed-out start
    /// resolves the gate too. Events arriving
    /// after the receiver side is gone end the task quietly; an event
    /// processed after the application tore the store down is logged, not
    /// a crash.
    pub fn attach(&self, mut events: mpsc::UnboundedReceiver<SessionEvent>) {
        let sync = Arc::clone(&self.sync);
        let ready = Arc::clone(&self.ready_tx);
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                sync.on_session_event(event).await;
                if ready.send(true).is_err() {
                    warn!("Session event processed after store teardown");
                    break;
                }
            }
        });
    }

    /// Resolves once the first session check has completed — on a
    /// signed-out start that is the provider's initial `SignedOut` event.
    /// Until then the session state is not trustworthy and dependents
    /// should not render.
    pub async fn ready(&self) {
        let mut rx = self.ready_rx.clone();
        // wait_for returns immediately if already true
        let _ = rx.wait_for(|ready| *ready).await;
    }

    /// The current session, if signed in.
    pub fn session(&self) -> Option<Session> {
        self.sync.state().session().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.sync.state().is_authenticated()
    }

    pub fn state(&self) -> SessionState {
        self.sync.state()
    }

    /// Subscribe to session state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.sync.subscribe()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), IdentityError> {
        self.sync.sign_in(email, password).await
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<(), IdentityError> {
        self.sync.sign_up(email, password, full_name).await
    }

    pub async fn sign_out(&self) -> Result<(), IdentityError> {
        self.sync.sign_out().await
    }

    /// Local-only profile edit; not persisted to the backend.
    pub fn update_profile(&self, display_name: Option<String>, avatar_url: Option<String>) {
        self.sync.update_profile(display_name, avatar_url);
    }
}
