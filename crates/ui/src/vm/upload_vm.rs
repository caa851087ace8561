use speech_core::model::Transcript;

/// Kind of the inline status banner on the upload page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Info => "status status--info",
            StatusKind::Success => "status status--success",
            StatusKind::Error => "status status--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Explicit state of the one allowed in-flight submission.
///
/// Terminal states stay put until the user starts a new submission; there is
/// no automatic reset and no client-side retry.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Success(Transcript),
    Error(String),
}

impl SubmissionState {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }

    /// The transcript of the latest successful submission, if that is where
    /// the state machine currently rests.
    #[must_use]
    pub fn transcript(&self) -> Option<&Transcript> {
        match self {
            SubmissionState::Success(transcript) => Some(transcript),
            _ => None,
        }
    }

    /// Banner text for the current state; `Idle` shows nothing.
    #[must_use]
    pub fn status(&self) -> Option<StatusMessage> {
        match self {
            SubmissionState::Idle => None,
            SubmissionState::Pending => Some(StatusMessage::info("Processing…")),
            SubmissionState::Success(_) => {
                Some(StatusMessage::success("Transcription complete!"))
            }
            SubmissionState::Error(message) => Some(StatusMessage::error(message.clone())),
        }
    }
}
