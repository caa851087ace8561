//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by the backend API client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The backend answered with a failure status and a readable message.
    ///
    /// The message comes from the response body (`detail` or `text` fields)
    /// when one is present, so it takes precedence over generic transport
    /// wording.
    #[error("{message}")]
    Backend {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The backend rejected the bearer credential.
    #[error("not authorized")]
    Unauthorized,

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("incorrect username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `TranscriptionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranscriptionError {
    #[error("a submission is already in progress")]
    Busy,
    #[error("{filename} is not an audio file")]
    NotAudio { filename: String },
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by the microphone `Recorder`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecorderError {
    #[error("recording already in progress")]
    AlreadyRecording,
    #[error("no recording in progress")]
    NotRecording,
    #[error("no audio input device available")]
    NoInputDevice,
    #[error("no supported recording format")]
    NoSupportedFormat,
    #[error("audio device error: {0}")]
    Device(String),
    #[error("recording captured no audio")]
    EmptyRecording,
    #[error("failed to encode recording: {0}")]
    Encode(String),
    #[error("capture worker stopped unexpectedly")]
    WorkerGone,
}
