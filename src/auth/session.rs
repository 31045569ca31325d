//! The local session model.

/// The signed-in user as seen by the application.
///
/// Exists only while an identity-provider session is active. Display name
/// and avatar are merged from the backend-of-record and the provider, in
/// that preference order, with fixed defaults as the last resort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub subject_id: String,
    pub display_name: String,
    pub avatar_url: String,
}

/// State machine over identity-provider session events.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No active provider session.
    #[default]
    SignedOut,
    /// A provider session is active; token retrieval and backend exchange
    /// are in flight.
    Syncing,
    /// A usable session, possibly built from provider-only data when the
    /// backend exchange failed.
    SignedIn(Session),
    /// A provider session exists but no usable token could be obtained.
    Degraded,
}

impl SessionState {
    /// The session, when one is usable.
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::SignedIn(session) => Some(session),
            _ => None,
        }
    }

    /// Authenticated means a usable session is present.
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_signed_out() {
        assert_eq!(SessionState::default(), SessionState::SignedOut);
    }

    #[test]
    fn test_authenticated_only_when_signed_in() {
        assert!(!SessionState::SignedOut.is_authenticated());
        assert!(!SessionState::Syncing.is_authenticated());
        assert!(!SessionState::Degraded.is_authenticated());

        let state = SessionState::SignedIn(Session {
            subject_id: "uid".to_string(),
            display_name: "Ada".to_string(),
            avatar_url: "a.png".to_string(),
        });
        assert!(state.is_authenticated());
        assert_eq!(state.session().unwrap().display_name, "Ada");
    }
}
