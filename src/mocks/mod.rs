//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions
//! that allow unit testing without a server or an identity provider.

pub mod http;
pub mod identity;
pub mod storage;

pub use http::{MockHttp, RecordedRequest};
pub use identity::MockIdentity;
pub use storage::MemoryCredentialStore;
