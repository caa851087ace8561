use std::sync::Arc;

use speech_core::model::User;
use storage::repository::CredentialRepository;

use crate::api::SpeechApi;
use crate::error::{ApiError, AuthError};
use crate::session::SessionStore;

/// Session lifecycle: login, registration, startup restore, and sign-out.
///
/// Owns the rule that the in-memory session, the durable credential slot,
/// and the backend's view of the token stay consistent: a token is persisted
/// only after the backend has vouched for it, and a rejected token is
/// discarded everywhere at once.
pub struct AuthService {
    api: Arc<dyn SpeechApi>,
    session: Arc<SessionStore>,
    credentials: Arc<dyn CredentialRepository>,
}

impl AuthService {
    #[must_use]
    pub fn new(
        api: Arc<dyn SpeechApi>,
        session: Arc<SessionStore>,
        credentials: Arc<dyn CredentialRepository>,
    ) -> Self {
        Self {
            api,
            session,
            credentials,
        }
    }

    #[must_use]
    pub fn identity(&self) -> Option<User> {
        self.session.identity()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    /// Exchange credentials for a token, fetch the identity behind it, and
    /// persist the token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when the backend rejects the
    /// username/password pair; in that case nothing is persisted and the
    /// session stays signed out.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let token = match self.api.login(username, password).await {
            Ok(token) => token,
            Err(ApiError::Unauthorized) => return Err(AuthError::InvalidCredentials),
            Err(err) => return Err(err.into()),
        };

        self.session.set_token(token.clone());
        let user = match self.api.me().await {
            Ok(user) => user,
            Err(err) => {
                self.session.clear();
                return Err(err.into());
            }
        };

        self.credentials.save_token(&token).await?;
        self.session.set_identity(user.clone());
        tracing::info!(username = %user.username, "signed in");
        Ok(user)
    }

    /// Create an account. Does not sign in; the caller sends the user to the
    /// login flow afterwards.
    ///
    /// # Errors
    ///
    /// Surfaces the backend's message (for example a duplicate username)
    /// via `AuthError::Api`.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        self.api.register(username, email, password).await?;
        tracing::info!(username, "account created");
        Ok(())
    }

    /// Re-derive the identity from a previously stored credential.
    ///
    /// Returns `Ok(None)` when no credential is stored or when the backend
    /// rejects the stored one; a rejected credential is discarded so the
    /// next run starts signed out cleanly.
    ///
    /// # Errors
    ///
    /// Transport failures are surfaced without discarding the stored token.
    pub async fn restore(&self) -> Result<Option<User>, AuthError> {
        let Some(token) = self.credentials.load_token().await? else {
            return Ok(None);
        };

        self.session.set_token(token);
        match self.api.me().await {
            Ok(user) => {
                self.session.set_identity(user.clone());
                Ok(Some(user))
            }
            Err(ApiError::Unauthorized | ApiError::Backend { .. }) => {
                tracing::info!("stored credential rejected, signing out");
                self.session.clear();
                self.credentials.clear_token().await?;
                Ok(None)
            }
            Err(err) => {
                self.session.clear();
                Err(err.into())
            }
        }
    }

    /// Sign out: clear the in-memory session and the durable credential.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the credential slot cannot be
    /// cleared; the in-memory session is cleared regardless.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.session.clear();
        self.credentials.clear_token().await?;
        tracing::info!("signed out");
        Ok(())
    }
}
