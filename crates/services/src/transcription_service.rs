use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use speech_core::model::{RecordId, Transcript, TranscriptionRecord};

use crate::api::{AudioPayload, SpeechApi};
use crate::error::TranscriptionError;

/// The capture-and-submit pipeline and the history it feeds.
///
/// Exactly one submission may be in flight at a time; a second `submit`
/// while one is pending is rejected instead of silently queued. The most
/// recent successful transcript is kept so the quiz view can pick up its
/// questions without re-fetching anything.
pub struct TranscriptionService {
    api: Arc<dyn SpeechApi>,
    busy: AtomicBool,
    latest: RwLock<Option<Transcript>>,
}

impl TranscriptionService {
    #[must_use]
    pub fn new(api: Arc<dyn SpeechApi>) -> Self {
        Self {
            api,
            busy: AtomicBool::new(false),
            latest: RwLock::new(None),
        }
    }

    /// Wrap named file bytes for submission.
    ///
    /// # Errors
    ///
    /// Returns `TranscriptionError::NotAudio` when the file's declared type
    /// is not audio. Nothing else is validated client-side; the backend's
    /// verdict is surfaced verbatim.
    pub fn payload_from_file(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<AudioPayload, TranscriptionError> {
        AudioPayload::from_file(filename, bytes).ok_or_else(|| TranscriptionError::NotAudio {
            filename: filename.to_string(),
        })
    }

    /// Submit one audio payload and record the transcript as the latest
    /// result.
    ///
    /// # Errors
    ///
    /// Returns `TranscriptionError::Busy` while another submission is
    /// pending, or the backend/transport error for this attempt. Failed
    /// attempts are never retried automatically.
    pub async fn submit(&self, payload: AudioPayload) -> Result<Transcript, TranscriptionError> {
        if self.busy.swap(true, Ordering::AcqRel) {
            return Err(TranscriptionError::Busy);
        }

        tracing::info!(filename = %payload.filename, bytes = payload.bytes.len(), "submitting audio");
        let result = self.api.upload(payload).await;
        self.busy.store(false, Ordering::Release);

        let transcript = result?;
        *self
            .latest
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(transcript.clone());
        Ok(transcript)
    }

    /// Full reload of the history list from the backend.
    ///
    /// # Errors
    ///
    /// Returns the underlying `ApiError` via `TranscriptionError::Api`.
    pub async fn history(&self) -> Result<Vec<TranscriptionRecord>, TranscriptionError> {
        Ok(self.api.history().await?)
    }

    /// Delete one record. The caller refreshes the list afterwards.
    ///
    /// # Errors
    ///
    /// Returns the underlying `ApiError` via `TranscriptionError::Api`.
    pub async fn delete(&self, id: RecordId) -> Result<(), TranscriptionError> {
        self.api.delete_record(id).await?;
        tracing::info!(%id, "deleted transcription");
        Ok(())
    }

    /// The most recent successful transcript, if any.
    #[must_use]
    pub fn latest_transcript(&self) -> Option<Transcript> {
        self.latest
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forget the latest transcript (the "clear result" action).
    pub fn clear_latest(&self) {
        *self
            .latest
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}
