// src/auth/mod.rs — Credential store for the API bearer token
//
// Holds at most one opaque token, persisted to ~/.chemviz/credential
// (chmod 600 on Unix) so a login survives process restarts. No token-format
// validation and no cross-process synchronization guarantee.

pub mod session;

use std::path::PathBuf;
use std::sync::RwLock;

use crate::infra::errors::ChemvizError;
use crate::infra::paths;

pub struct CredentialStore {
    path: PathBuf,
    cached: RwLock<Option<String>>,
}

impl CredentialStore {
    /// Open the store at the default credential path.
    pub fn open_default() -> Self {
        Self::open(paths::credential_path())
    }

    /// Open the store backed by an explicit file. The file is read once;
    /// set/clear keep disk and the in-memory copy in sync.
    pub fn open(path: PathBuf) -> Self {
        let cached = std::fs::read_to_string(&path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            path,
            cached: RwLock::new(cached),
        }
    }

    /// Current token, if any. Absence means unauthenticated.
    pub fn get(&self) -> Option<String> {
        self.cached.read().unwrap().clone()
    }

    /// Persist a new token, replacing any previous one.
    /// Atomic write: temp file + rename, chmod 600 on Unix.
    pub fn set(&self, token: &str) -> Result<(), ChemvizError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("tmp");
        std::fs::write(&tmp_path, token)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
        }

        std::fs::rename(&tmp_path, &self.path)?;
        *self.cached.write().unwrap() = Some(token.to_string());
        Ok(())
    }

    /// Destroy the stored token. A missing file is not an error.
    pub fn clear(&self) -> Result<(), ChemvizError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        *self.cached.write().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> CredentialStore {
        CredentialStore::open(dir.path().join("credential"))
    }

    #[test]
    fn set_then_get_roundtrips() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get(), None);

        store.set("tok-abc123").unwrap();
        assert_eq!(store.get(), Some("tok-abc123".into()));
    }

    #[test]
    fn clear_removes_token() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.set("tok").unwrap();
        store.clear().unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn clear_on_empty_store_is_ok() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.clear().unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn token_survives_reopen() {
        let dir = tempdir().unwrap();
        store_in(&dir).set("tok-persisted").unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.get(), Some("tok-persisted".into()));
    }

    #[test]
    fn whitespace_only_file_reads_as_absent() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("credential"), "\n").unwrap();
        assert_eq!(store_in(&dir).get(), None);
    }
}
