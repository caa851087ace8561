use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable slot for the session bearer credential.
///
/// The client keeps exactly one credential across restarts; the repository
/// hides whether it lives in SQLite or memory. Tokens are opaque strings
/// issued by the backend.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Fetch the stored credential, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be read.
    async fn load_token(&self) -> Result<Option<String>, StorageError>;

    /// Persist or replace the credential.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the token cannot be stored.
    async fn save_token(&self, token: &str) -> Result<(), StorageError>;

    /// Discard the credential. Clearing an empty slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be written.
    async fn clear_token(&self) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    slots: Arc<Mutex<HashMap<&'static str, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

const TOKEN_SLOT: &str = "token";

#[async_trait]
impl CredentialRepository for InMemoryRepository {
    async fn load_token(&self) -> Result<Option<String>, StorageError> {
        let guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(TOKEN_SLOT).cloned())
    }

    async fn save_token(&self, token: &str) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(TOKEN_SLOT, token.to_string());
        Ok(())
    }

    async fn clear_token(&self) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(TOKEN_SLOT);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub credentials: Arc<dyn CredentialRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let credentials: Arc<dyn CredentialRepository> = Arc::new(repo);
        Self { credentials }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_token() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.load_token().await.unwrap(), None);

        repo.save_token("abc123").await.unwrap();
        assert_eq!(repo.load_token().await.unwrap(), Some("abc123".into()));

        repo.save_token("def456").await.unwrap();
        assert_eq!(repo.load_token().await.unwrap(), Some("def456".into()));

        repo.clear_token().await.unwrap();
        assert_eq!(repo.load_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn clearing_empty_slot_is_not_an_error() {
        let repo = InMemoryRepository::new();
        repo.clear_token().await.unwrap();
    }
}
