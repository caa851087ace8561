use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::sync::Semaphore;

use services::api::{AudioPayload, SpeechApi};
use services::error::{ApiError, TranscriptionError};
use services::TranscriptionService;
use speech_core::model::{Question, RecordId, Transcript, TranscriptionRecord, User};
use speech_core::time::fixed_now;

/// Backend double whose upload outcome is scripted per test.
struct UploadApi {
    outcome: UploadOutcome,
    /// Closed until the test releases it; lets a test hold an upload
    /// in flight.
    gate: Option<Arc<Semaphore>>,
    /// Receives a permit as soon as an upload reaches the gate.
    started: Option<Arc<Semaphore>>,
    records: Vec<TranscriptionRecord>,
}

enum UploadOutcome {
    Text(&'static str),
    WithQuestions(&'static str),
    BackendError(&'static str),
}

impl UploadApi {
    fn succeeding(text: &'static str) -> Self {
        Self {
            outcome: UploadOutcome::Text(text),
            gate: None,
            started: None,
            records: Vec::new(),
        }
    }

    fn with_questions(text: &'static str) -> Self {
        Self {
            outcome: UploadOutcome::WithQuestions(text),
            gate: None,
            started: None,
            records: Vec::new(),
        }
    }

    fn failing(message: &'static str) -> Self {
        Self {
            outcome: UploadOutcome::BackendError(message),
            gate: None,
            started: None,
            records: Vec::new(),
        }
    }

    fn gated(text: &'static str, gate: Arc<Semaphore>, started: Arc<Semaphore>) -> Self {
        Self {
            outcome: UploadOutcome::Text(text),
            gate: Some(gate),
            started: Some(started),
            records: Vec::new(),
        }
    }

    fn with_records(mut self, records: Vec<TranscriptionRecord>) -> Self {
        self.records = records;
        self
    }
}

#[async_trait]
impl SpeechApi for UploadApi {
    async fn login(&self, _: &str, _: &str) -> Result<String, ApiError> {
        Err(ApiError::Unauthorized)
    }

    async fn register(&self, _: &str, _: &str, _: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn me(&self) -> Result<User, ApiError> {
        Err(ApiError::Unauthorized)
    }

    async fn upload(&self, _: AudioPayload) -> Result<Transcript, ApiError> {
        if let Some(started) = &self.started {
            started.add_permits(1);
        }
        if let Some(gate) = &self.gate {
            let _permit = gate.acquire().await.expect("gate open");
        }
        match self.outcome {
            UploadOutcome::Text(text) => Ok(Transcript {
                text: text.to_string(),
                questions: Vec::new(),
            }),
            UploadOutcome::WithQuestions(text) => Ok(Transcript {
                text: text.to_string(),
                questions: vec![
                    Question::new("What was the topic?", options(), 0).unwrap(),
                    Question::new("What comes next?", options(), 2).unwrap(),
                ],
            }),
            UploadOutcome::BackendError(message) => Err(ApiError::Backend {
                status: StatusCode::BAD_REQUEST,
                message: message.to_string(),
            }),
        }
    }

    async fn history(&self) -> Result<Vec<TranscriptionRecord>, ApiError> {
        Ok(self.records.clone())
    }

    async fn delete_record(&self, _: RecordId) -> Result<(), ApiError> {
        Ok(())
    }
}

fn options() -> Vec<String> {
    vec!["a".into(), "b".into(), "c".into(), "d".into()]
}

fn payload() -> AudioPayload {
    AudioPayload::from_file("talk.mp3", vec![1, 2, 3]).unwrap()
}

fn record(id: i64) -> TranscriptionRecord {
    TranscriptionRecord {
        id: RecordId::new(id),
        filename: format!("clip-{id}.wav"),
        text: format!("transcript {id}"),
        created_at: fixed_now(),
    }
}

#[tokio::test]
async fn successful_upload_without_questions_offers_no_quiz() {
    let service = TranscriptionService::new(Arc::new(UploadApi::succeeding("hello")));

    let transcript = service.submit(payload()).await.unwrap();
    assert_eq!(transcript.text, "hello");
    assert!(!transcript.has_quiz());

    let latest = service.latest_transcript().expect("latest kept");
    assert_eq!(latest.text, "hello");
}

#[tokio::test]
async fn successful_upload_keeps_valid_questions() {
    let service = TranscriptionService::new(Arc::new(UploadApi::with_questions("lecture")));

    let transcript = service.submit(payload()).await.unwrap();
    assert!(transcript.has_quiz());
    assert_eq!(transcript.questions.len(), 2);
}

#[tokio::test]
async fn backend_message_is_surfaced_verbatim() {
    let service = TranscriptionService::new(Arc::new(UploadApi::failing(
        "Error: Could not understand audio",
    )));

    let err = service.submit(payload()).await.unwrap_err();
    assert_eq!(err.to_string(), "Error: Could not understand audio");
    assert!(service.latest_transcript().is_none());
}

#[tokio::test]
async fn second_submission_while_pending_is_rejected() {
    let gate = Arc::new(Semaphore::new(0));
    let started = Arc::new(Semaphore::new(0));
    let service = Arc::new(TranscriptionService::new(Arc::new(UploadApi::gated(
        "slow",
        Arc::clone(&gate),
        Arc::clone(&started),
    ))));

    let in_flight = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.submit(payload()).await })
    };
    // Wait until the first submission is actually in flight.
    let permit = started.acquire().await.unwrap();
    permit.forget();

    let err = service.submit(payload()).await.unwrap_err();
    assert!(matches!(err, TranscriptionError::Busy));

    gate.add_permits(1);
    let transcript = in_flight.await.unwrap().unwrap();
    assert_eq!(transcript.text, "slow");

    // The guard resets once the first submission resolves.
    gate.add_permits(1);
    service.submit(payload()).await.unwrap();
}

#[tokio::test]
async fn failed_submission_releases_the_busy_guard() {
    let service = TranscriptionService::new(Arc::new(UploadApi::failing("nope")));

    assert!(service.submit(payload()).await.is_err());
    // A new user-initiated attempt is allowed immediately.
    assert!(service.submit(payload()).await.is_err());
}

#[tokio::test]
async fn history_lists_server_ordered_records() {
    let api = UploadApi::succeeding("x").with_records(vec![record(2), record(1)]);
    let service = TranscriptionService::new(Arc::new(api));

    let history = service.history().await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, RecordId::new(2));
}

#[tokio::test]
async fn non_audio_files_are_rejected_before_upload() {
    let service = TranscriptionService::new(Arc::new(UploadApi::succeeding("x")));

    let err = service.payload_from_file("notes.pdf", vec![1]).unwrap_err();
    assert!(matches!(err, TranscriptionError::NotAudio { .. }));

    service.payload_from_file("talk.flac", vec![1]).unwrap();
}
