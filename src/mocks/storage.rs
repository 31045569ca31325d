//! In-memory credential store for testing.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::MarketResult;
use crate::traits::CredentialStore;

/// Credential slot held in memory. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    token: Arc<RwLock<Option<String>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token already stored, as after an earlier sign-in.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.to_string()))),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn put(&self, token: &str) -> MarketResult<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn delete(&self) -> MarketResult<()> {
        *self.token.write() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.get(), None);

        store.put("tok").unwrap();
        assert_eq!(store.get().as_deref(), Some("tok"));

        store.delete().unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryCredentialStore::new();
        let view = store.clone();

        store.put("tok").unwrap();
        assert_eq!(view.get().as_deref(), Some("tok"));
    }
}
