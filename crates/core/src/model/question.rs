use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question shape as received from the backend.
///
/// The backend generates questions alongside a transcription; individual
/// records can be malformed (missing options, out-of-range answer index).
/// A draft must pass [`QuestionDraft::validate`] before it can reach any
/// rendering or scoring code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl QuestionDraft {
    pub fn validate(self) -> Result<Question, QuestionValidationError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(QuestionValidationError::EmptyPrompt);
        }
        if self.options.is_empty() {
            return Err(QuestionValidationError::NoOptions);
        }
        if self.options.iter().any(|option| option.trim().is_empty()) {
            return Err(QuestionValidationError::BlankOption);
        }
        if self.correct >= self.options.len() {
            return Err(QuestionValidationError::CorrectOutOfRange {
                correct: self.correct,
                options: self.options.len(),
            });
        }

        Ok(Question {
            prompt: prompt.to_string(),
            options: self.options,
            correct: self.correct,
        })
    }
}

/// A validated multiple-choice comprehension question.
///
/// Invariants: `options` is non-empty and `correct < options.len()`.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct: usize,
}

impl Question {
    /// Build a question directly from its parts.
    ///
    /// # Errors
    ///
    /// Returns `QuestionValidationError` when the prompt is blank, the
    /// options list is empty or contains blanks, or the correct index is
    /// out of range.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: usize,
    ) -> Result<Self, QuestionValidationError> {
        QuestionDraft {
            prompt: prompt.into(),
            options,
            correct,
        }
        .validate()
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Whether the given option index answers this question correctly.
    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionValidationError {
    #[error("question prompt is empty")]
    EmptyPrompt,

    #[error("question has no options")]
    NoOptions,

    #[error("question has a blank option")]
    BlankOption,

    #[error("correct option index {correct} out of range for {options} options")]
    CorrectOutOfRange { correct: usize, options: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {i}")).collect()
    }

    #[test]
    fn valid_question_passes() {
        let question = Question::new("What was discussed?", options(4), 2).unwrap();
        assert_eq!(question.options().len(), 4);
        assert!(question.is_correct(2));
        assert!(!question.is_correct(0));
    }

    #[test]
    fn question_fails_if_prompt_blank() {
        let err = Question::new("   ", options(2), 0).unwrap_err();
        assert!(matches!(err, QuestionValidationError::EmptyPrompt));
    }

    #[test]
    fn question_fails_if_no_options() {
        let err = Question::new("Q", Vec::new(), 0).unwrap_err();
        assert!(matches!(err, QuestionValidationError::NoOptions));
    }

    #[test]
    fn question_fails_if_option_blank() {
        let err = Question::new("Q", vec!["a".into(), " ".into()], 0).unwrap_err();
        assert!(matches!(err, QuestionValidationError::BlankOption));
    }

    #[test]
    fn question_fails_if_correct_out_of_range() {
        let err = Question::new("Q", options(3), 3).unwrap_err();
        assert!(matches!(
            err,
            QuestionValidationError::CorrectOutOfRange {
                correct: 3,
                options: 3
            }
        ));
    }
}
