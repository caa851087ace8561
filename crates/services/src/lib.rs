#![forbid(unsafe_code)]

pub mod api;
pub mod auth_service;
pub mod error;
pub mod recorder;
pub mod session;
pub mod transcription_service;

pub use speech_core::Clock;

pub use api::{AudioPayload, HttpApi, SpeechApi};
pub use auth_service::AuthService;
pub use error::{ApiError, AuthError, RecorderError, TranscriptionError};
pub use recorder::Recorder;
pub use session::{Session, SessionStore};
pub use transcription_service::TranscriptionService;
