//! File-backed credential storage.

use std::path::PathBuf;

use tracing::warn;

use crate::config;
use crate::error::{MarketError, MarketResult};
use crate::traits::CredentialStore;

/// [`CredentialStore`] persisting the token as a small file in the
/// platform's local data directory.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store under the default application data directory.
    pub fn new() -> Self {
        let base_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::at(base_dir.join("admarkt"))
    }

    /// Store under an explicit directory. Used by tests and by callers
    /// that manage their own data layout.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(config::CREDENTIAL_SLOT),
        }
    }
}

impl Default for FileCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for FileCredentialStore {
    fn put(&self, token: &str) -> MarketResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| MarketError::Storage(format!("create {}: {e}", parent.display())))?;
        }
        std::fs::write(&self.path, token)
            .map_err(|e| MarketError::Storage(format!("write {}: {e}", self.path.display())))
    }

    fn get(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(token) if !token.is_empty() => Some(token),
            Ok(_) => None,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read credential slot: {}", e);
                None
            }
        }
    }

    fn delete(&self) -> MarketResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MarketError::Storage(format!(
                "remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}
