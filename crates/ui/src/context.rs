use std::sync::Arc;

use services::{AuthService, Recorder, TranscriptionService};
use speech_core::model::User;

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn auth(&self) -> Arc<AuthService>;
    fn transcriptions(&self) -> Arc<TranscriptionService>;
    fn recorder(&self) -> Arc<Recorder>;
}

/// Where the signed-in state currently stands, from the UI's point of view.
///
/// `Loading` covers the startup window while the stored credential is being
/// re-validated against the backend; protected views show a placeholder
/// instead of bouncing to the login page during it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    SignedOut,
    SignedIn(User),
}

impl SessionState {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::SignedIn(user) => Some(user),
            SessionState::Loading | SessionState::SignedOut => None,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    transcriptions: Arc<TranscriptionService>,
    recorder: Arc<Recorder>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth: app.auth(),
            transcriptions: app.transcriptions(),
            recorder: app.recorder(),
        }
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn transcriptions(&self) -> Arc<TranscriptionService> {
        Arc::clone(&self.transcriptions)
    }

    #[must_use]
    pub fn recorder(&self) -> Arc<Recorder> {
        Arc::clone(&self.recorder)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
