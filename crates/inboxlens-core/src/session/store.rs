//! Session persistence.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::model::UserSession;
use crate::error::Result;

/// Stores the current session as a JSON file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored session, creating and saving a new one on first run.
    ///
    /// A corrupt file is replaced with a fresh session.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub async fn load_or_create(&self) -> Result<UserSession> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => match serde_json::from_str::<UserSession>(&contents) {
                Ok(session) if !session.id().trim().is_empty() => {
                    info!("Loaded session {}", session.id());
                    return Ok(session);
                }
                Ok(_) => warn!("Stored session at {:?} has an empty id", self.path),
                Err(e) => warn!("Discarding unreadable session file {:?}: {}", self.path, e),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let session = UserSession::generate();
        self.save(&session).await?;
        info!("Created session {}", session.id());
        Ok(session)
    }

    /// Replaces the stored session with a new one and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn reset(&self) -> Result<UserSession> {
        let session = UserSession::generate();
        self.save(&session).await?;
        info!("Session reset to {}", session.id());
        Ok(session)
    }

    async fn save(&self, session: &UserSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let contents = serde_json::to_string_pretty(session)?;
        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_or_create_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));

        let first = store.load_or_create().await.unwrap();
        assert!(store.path().exists());

        let second = store.load_or_create().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_reset_replaces_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        let original = store.load_or_create().await.unwrap();
        let reset = store.reset().await.unwrap();
        assert_ne!(original.id(), reset.id());
        assert_eq!(store.load_or_create().await.unwrap(), reset);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = SessionStore::new(&path);
        let session = store.load_or_create().await.unwrap();
        assert!(session.id().starts_with("user_"));
        assert_eq!(store.load_or_create().await.unwrap(), session);
    }
}
