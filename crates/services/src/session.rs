use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use speech_core::model::User;

/// The authenticated-identity-plus-credential context for the client.
///
/// The credential is an opaque bearer token issued by the backend; the
/// identity is re-derived from it on startup. Both are cleared together on
/// sign-out or when the backend rejects the token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    identity: Option<User>,
}

impl Session {
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn identity(&self) -> Option<&User> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Shared session state.
///
/// This is the single place the bearer credential lives in memory: the HTTP
/// client reads it to authorize every outgoing request, and `AuthService`
/// writes it on login/logout/restore. Handed to both as an explicit
/// constructor dependency.
#[derive(Default)]
pub struct SessionStore {
    inner: RwLock<Session>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    #[must_use]
    pub fn identity(&self) -> Option<User> {
        self.read().identity.clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.write().token = Some(token.into());
    }

    pub fn set_identity(&self, user: User) {
        self.write().identity = Some(user);
    }

    /// Drop both credential and identity.
    pub fn clear(&self) {
        let mut guard = self.write();
        guard.token = None;
        guard.identity = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_starts_empty() {
        let store = SessionStore::new();
        assert_eq!(store.token(), None);
        assert_eq!(store.identity(), None);
        assert!(!store.snapshot().is_authenticated());
    }

    #[test]
    fn clear_drops_token_and_identity() {
        let store = SessionStore::new();
        store.set_token("tok");
        store.set_identity(User {
            username: "alice".into(),
            email: "alice@example.com".into(),
        });
        assert!(store.snapshot().is_authenticated());

        store.clear();
        assert_eq!(store.token(), None);
        assert_eq!(store.identity(), None);
    }
}
