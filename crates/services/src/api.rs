use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::{Client, RequestBuilder, Response, StatusCode, multipart};
use serde::Deserialize;

use speech_core::model::{Question, RecordId, Transcript, TranscriptionRecord, User};

use crate::error::ApiError;
use crate::session::SessionStore;

//
// ─── PAYLOAD ───────────────────────────────────────────────────────────────────
//

/// One audio file ready for submission, regardless of where it came from
/// (file picker, drag-drop, or the microphone recorder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    pub filename: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl AudioPayload {
    /// Wrap named bytes as an audio payload.
    ///
    /// Returns `None` when the filename's extension does not map to a known
    /// audio media type. No other client-side validation happens here; the
    /// backend stays the source of truth for size and format.
    #[must_use]
    pub fn from_file(filename: impl Into<String>, bytes: Vec<u8>) -> Option<Self> {
        let filename = filename.into();
        let extension = filename.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())?;
        let media_type = media_type_for_extension(&extension)?;
        Some(Self {
            filename,
            media_type: media_type.to_string(),
            bytes,
        })
    }
}

fn media_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "mp3" => Some("audio/mpeg"),
        "wav" => Some("audio/wav"),
        "m4a" => Some("audio/mp4"),
        "aac" => Some("audio/aac"),
        "ogg" => Some("audio/ogg"),
        "opus" => Some("audio/opus"),
        "flac" => Some("audio/flac"),
        "webm" => Some("audio/webm"),
        _ => None,
    }
}

//
// ─── API CONTRACT ──────────────────────────────────────────────────────────────
//

/// Backend operations the client depends on.
///
/// The UI and the services only ever talk to this trait so tests can
/// substitute a scripted backend.
#[async_trait]
pub trait SpeechApi: Send + Sync {
    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` on rejected credentials.
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError>;

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Backend` with the backend's message (for example
    /// a duplicate username) on failure.
    async fn register(&self, username: &str, email: &str, password: &str)
    -> Result<(), ApiError>;

    /// Fetch the identity behind the current bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` when the token is missing or stale.
    async fn me(&self) -> Result<User, ApiError>;

    /// Submit one audio payload and return the transcript with any valid
    /// derived questions.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Backend` carrying the backend's own message when
    /// it rejects the upload.
    async fn upload(&self, payload: AudioPayload) -> Result<Transcript, ApiError>;

    /// List prior transcriptions, newest first (server-ordered).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport or backend failure.
    async fn history(&self) -> Result<Vec<TranscriptionRecord>, ApiError>;

    /// Remove one transcription record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Backend` when the record does not exist.
    async fn delete_record(&self, id: RecordId) -> Result<(), ApiError>;
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    text: String,
    #[serde(default)]
    questions: Vec<WireQuestion>,
}

/// Question shape as the backend emits it. Individual records can be
/// malformed; they are validated (and rejected) before leaving this module.
#[derive(Debug, Deserialize)]
struct WireQuestion {
    question: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    answer: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    id: i64,
    filename: String,
    text: String,
    created_at: NaiveDateTime,
}

impl From<HistoryRow> for TranscriptionRecord {
    fn from(row: HistoryRow) -> Self {
        Self {
            id: RecordId::new(row.id),
            filename: row.filename,
            text: row.text,
            created_at: row.created_at.and_utc(),
        }
    }
}

fn validate_questions(wire: Vec<WireQuestion>) -> Vec<Question> {
    let mut questions = Vec::with_capacity(wire.len());
    for (index, item) in wire.into_iter().enumerate() {
        let Some(answer) = item.answer else {
            tracing::warn!(index, "skipping question without a correct answer index");
            continue;
        };
        match Question::new(item.question, item.options, answer) {
            Ok(question) => questions.push(question),
            Err(err) => tracing::warn!(index, %err, "skipping malformed question"),
        }
    }
    questions
}

//
// ─── HTTP CLIENT ───────────────────────────────────────────────────────────────
//

/// `SpeechApi` over HTTP.
///
/// The bearer credential is attached to every request from the shared
/// `SessionStore`, which is handed in as a constructor dependency rather
/// than read from ambient state.
pub struct HttpApi {
    client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl HttpApi {
    #[must_use]
    pub fn new(base_url: &str, session: Arc<SessionStore>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Convert failure statuses into `ApiError`, preferring the message the
    /// backend put in the response body over generic transport wording.
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        let message = backend_message(&body)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        Err(ApiError::Backend { status, message })
    }
}

fn backend_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("text")
        .and_then(serde_json::Value::as_str)
        .or_else(|| value.get("detail").and_then(serde_json::Value::as_str))
        .map(str::to_string)
}

#[async_trait]
impl SpeechApi for HttpApi {
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/login"))
            .form(&[
                ("username", username),
                ("password", password),
                ("grant_type", "password"),
            ])
            .send()
            .await?;
        let body: TokenResponse = Self::check(response).await?.json().await?;
        Ok(body.access_token)
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint("/register"))
            .form(&[("username", username), ("email", email), ("password", password)])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn me(&self) -> Result<User, ApiError> {
        let response = self
            .authorize(self.client.get(self.endpoint("/users/me")))
            .send()
            .await?;
        let user: User = Self::check(response).await?.json().await?;
        Ok(user)
    }

    async fn upload(&self, payload: AudioPayload) -> Result<Transcript, ApiError> {
        let part = multipart::Part::bytes(payload.bytes)
            .file_name(payload.filename)
            .mime_str(&payload.media_type)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .authorize(self.client.post(self.endpoint("/upload")))
            .multipart(form)
            .send()
            .await?;
        let body: UploadResponse = Self::check(response).await?.json().await?;

        Ok(Transcript {
            text: body.text,
            questions: validate_questions(body.questions),
        })
    }

    async fn history(&self) -> Result<Vec<TranscriptionRecord>, ApiError> {
        let response = self
            .authorize(self.client.get(self.endpoint("/history")))
            .send()
            .await?;
        let rows: Vec<HistoryRow> = Self::check(response).await?.json().await?;
        Ok(rows.into_iter().map(TranscriptionRecord::from).collect())
    }

    async fn delete_record(&self, id: RecordId) -> Result<(), ApiError> {
        let response = self
            .authorize(
                self.client
                    .delete(self.endpoint(&format!("/history/{id}"))),
            )
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
