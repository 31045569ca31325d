//! Session state and identity-provider synchronization.

pub mod session;
pub mod synchronizer;

pub use session::{Session, SessionState};
pub use synchronizer::SessionSynchronizer;
