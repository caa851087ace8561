use dioxus::prelude::*;

use services::error::{AuthError, TranscriptionError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The backend rejected the session credential.
    Unauthorized,
    /// A human-readable message, usually straight from the backend.
    Message(String),
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ViewError::Unauthorized => "Your session has expired. Please sign in again.",
            ViewError::Message(text) => text,
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<TranscriptionError> for ViewError {
    fn from(err: TranscriptionError) -> Self {
        match err {
            TranscriptionError::Api(services::ApiError::Unauthorized) => ViewError::Unauthorized,
            other => ViewError::Message(other.to_string()),
        }
    }
}

impl From<AuthError> for ViewError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Api(services::ApiError::Unauthorized) => ViewError::Unauthorized,
            other => ViewError::Message(other.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
