use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::RecordId;
use crate::model::question::Question;

/// One persisted transcription as listed by the history endpoint.
///
/// Produced by the backend on each successful submission; the client reads
/// and deletes these, never mutates the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptionRecord {
    pub id: RecordId,
    pub filename: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl TranscriptionRecord {
    /// Short preview of the transcript text for list rendering.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        let mut preview: String = self.text.chars().take(max_chars).collect();
        if self.text.chars().count() > max_chars {
            preview.push('…');
        }
        preview
    }
}

/// The result of one successful upload: the transcript text plus whatever
/// valid comprehension questions the backend derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
    pub questions: Vec<Question>,
}

impl Transcript {
    /// A quiz can be offered only when at least one valid question arrived.
    #[must_use]
    pub fn has_quiz(&self) -> bool {
        !self.questions.is_empty()
    }
}
