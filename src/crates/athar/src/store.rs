//! The credential store: one TOML snapshot of the active triple.
//!
//! The file is read as a snapshot and written only by the credential
//! transaction's commit, always as one complete serialization - there is
//! no field-level update path.

use crate::error::{AtharError, Result};
use athar_core::{Credentials, ProviderKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk shape: the credentials triple plus the commit timestamp.
#[derive(Debug, Serialize, Deserialize)]
struct CredentialsFile {
    provider: ProviderKind,
    secret_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    proxy_endpoint: Option<String>,
    updated_at: DateTime<Utc>,
}

/// File-backed credential store.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store at the default location, `~/.athar/credentials.toml`.
    pub fn open_default() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| AtharError::Store("could not determine home directory".to_string()))?;
        Ok(Self::at_path(home.join(".athar").join("credentials.toml")))
    }

    /// Store at an explicit path. Tests point this at a temp directory.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the active snapshot. A missing file means "not configured".
    pub fn load(&self) -> Result<Option<Credentials>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let file: CredentialsFile = toml::from_str(&text)
            .map_err(|e| AtharError::Store(format!("invalid credential file: {}", e)))?;

        Ok(Some(Credentials {
            provider: file.provider,
            secret_key: file.secret_key,
            proxy_endpoint: file.proxy_endpoint,
        }))
    }

    /// Write the snapshot as one complete file.
    pub fn save(&self, credentials: &Credentials) -> Result<()> {
        let file = CredentialsFile {
            provider: credentials.provider,
            secret_key: credentials.secret_key.clone(),
            proxy_endpoint: credentials.proxy_endpoint.clone(),
            updated_at: Utc::now(),
        };

        let text = toml::to_string_pretty(&file)
            .map_err(|e| AtharError::Store(format!("failed to serialize credentials: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, text)?;

        debug!(path = %self.path.display(), provider = %credentials.provider, "credentials saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileCredentialStore {
        FileCredentialStore::at_path(dir.path().join("credentials.toml"))
    }

    #[test]
    fn missing_file_means_not_configured() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load().unwrap(), None);
    }

    #[test]
    fn snapshot_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let credentials = Credentials::new(ProviderKind::Gemini, "secret")
            .with_proxy("https://bridge.example");
        store.save(&credentials).unwrap();

        assert_eq!(store.load().unwrap(), Some(credentials));
    }

    #[test]
    fn save_replaces_the_whole_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .save(&Credentials::new(ProviderKind::Gemini, "old").with_proxy("https://old.example"))
            .unwrap();
        store
            .save(&Credentials::new(ProviderKind::Groq, "new"))
            .unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.provider, ProviderKind::Groq);
        assert_eq!(loaded.secret_key, "new");
        // No stale proxy field survives a full-snapshot write.
        assert_eq!(loaded.proxy_endpoint, None);
    }

    #[test]
    fn corrupt_file_is_a_store_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not = [valid").unwrap();

        assert!(matches!(store.load(), Err(AtharError::Store(_))));
    }
}
