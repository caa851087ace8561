use std::fmt;

use thiserror::Error;

use crate::model::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for quiz")]
    Empty,

    #[error("quiz already completed")]
    Completed,

    #[error("quiz still in progress")]
    InProgress,

    #[error("current question has no selection")]
    NoSelection,

    #[error("option index {option} out of range for {options} options")]
    OptionOutOfRange { option: usize, options: usize },

    #[error("submit is only allowed on the last question")]
    NotLastQuestion,
}

/// Result of advancing the quiz by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    /// Moved on to the next question.
    Continue,
    /// The last question was answered and the quiz is scored.
    Completed { score: u32 },
}

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// In-memory state machine for one attempt at a generated quiz.
///
/// Steps through the questions one at a time, records exactly one selection
/// per question, and computes a deterministic score when the last question
/// is answered. While the quiz is in progress `current` always indexes a
/// real question; the score exists only once the quiz is completed.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    selections: Vec<Option<usize>>,
    score: Option<u32>,
}

impl QuizSession {
    /// Create a session over the given questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided. Callers are
    /// expected to redirect away rather than render an empty quiz.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        let selections = vec![None; questions.len()];
        Ok(Self {
            questions,
            current: 0,
            selections,
            score: None,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Total number of questions in this quiz.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.score.is_some()
    }

    /// The recorded selection for question `index`, if any.
    #[must_use]
    pub fn selection(&self, index: usize) -> Option<usize> {
        self.selections.get(index).copied().flatten()
    }

    #[must_use]
    pub fn current_selection(&self) -> Option<usize> {
        self.selection(self.current)
    }

    /// Whether the selection for question `index` was correct.
    ///
    /// `None` when the question was never answered.
    #[must_use]
    pub fn selection_correct(&self, index: usize) -> Option<bool> {
        let selected = self.selection(index)?;
        let question = self.questions.get(index)?;
        Some(question.is_correct(selected))
    }

    /// Defined only once the quiz is completed.
    #[must_use]
    pub fn score(&self) -> Option<u32> {
        self.score
    }

    /// Score as a rounded percentage of the question count.
    #[must_use]
    pub fn percentage(&self) -> Option<u32> {
        let score = self.score?;
        let total = self.questions.len();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = (f64::from(score) * 100.0 / total as f64).round() as u32;
        Some(pct)
    }

    /// Record a selection for the current question, overwriting any prior
    /// selection. Does not advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after the quiz is finalized and
    /// `QuizError::OptionOutOfRange` for an invalid option index.
    pub fn select_option(&mut self, option: usize) -> Result<(), QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        let options = self.current_question().options().len();
        if option >= options {
            return Err(QuizError::OptionOutOfRange { option, options });
        }
        self.selections[self.current] = Some(option);
        Ok(())
    }

    /// Move to the next question, or score the quiz when the current
    /// question is the last one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoSelection` if the current question has no
    /// selection yet, and `QuizError::Completed` after finalization.
    pub fn advance(&mut self) -> Result<QuizOutcome, QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        if self.current_selection().is_none() {
            return Err(QuizError::NoSelection);
        }

        if self.is_last_question() {
            let score = self.finalize();
            return Ok(QuizOutcome::Completed { score });
        }

        self.current += 1;
        Ok(QuizOutcome::Continue)
    }

    /// Score the quiz directly from the last question.
    ///
    /// Equivalent to the scoring branch of [`advance`](Self::advance), but
    /// rejects being called from any other position.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotLastQuestion` off the last index,
    /// `QuizError::NoSelection` without a selection, and
    /// `QuizError::Completed` after finalization.
    pub fn submit(&mut self) -> Result<u32, QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        if !self.is_last_question() {
            return Err(QuizError::NotLastQuestion);
        }
        if self.current_selection().is_none() {
            return Err(QuizError::NoSelection);
        }
        Ok(self.finalize())
    }

    /// Restart the quiz over the same question list.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InProgress` unless the quiz is completed.
    pub fn retake(&mut self) -> Result<(), QuizError> {
        if !self.is_complete() {
            return Err(QuizError::InProgress);
        }
        self.current = 0;
        self.selections = vec![None; self.questions.len()];
        self.score = None;
        Ok(())
    }

    fn finalize(&mut self) -> u32 {
        let score = self.compute_score();
        self.score = Some(score);
        score
    }

    fn compute_score(&self) -> u32 {
        let mut score = 0_u32;
        for (question, selection) in self.questions.iter().zip(&self.selections) {
            if selection.is_some_and(|selected| question.is_correct(selected)) {
                score = score.saturating_add(1);
            }
        }
        score
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answered", &self.selections.iter().flatten().count())
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn build_question(id: usize, correct: usize) -> Question {
        let options = (0..4).map(|i| format!("option {i}")).collect();
        Question::new(format!("question {id}"), options, correct).unwrap()
    }

    fn build_quiz(n: usize) -> QuizSession {
        let questions = (0..n).map(|i| build_question(i, i % 4)).collect();
        QuizSession::new(questions).unwrap()
    }

    #[test]
    fn empty_quiz_returns_error() {
        let err = QuizSession::new(Vec::new()).unwrap_err();
        assert!(matches!(err, QuizError::Empty));
    }

    #[test]
    fn advance_without_selection_is_rejected() {
        let mut quiz = build_quiz(2);
        let err = quiz.advance().unwrap_err();
        assert!(matches!(err, QuizError::NoSelection));
        assert_eq!(quiz.current_index(), 0);
    }

    #[test]
    fn select_overwrites_previous_selection() {
        let mut quiz = build_quiz(2);
        quiz.select_option(1).unwrap();
        quiz.select_option(3).unwrap();
        assert_eq!(quiz.current_selection(), Some(3));
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut quiz = build_quiz(1);
        let err = quiz.select_option(4).unwrap_err();
        assert!(matches!(
            err,
            QuizError::OptionOutOfRange {
                option: 4,
                options: 4
            }
        ));
    }

    #[test]
    fn quiz_advances_and_completes_with_score() {
        // Correct answers are 0, 1, 2; answer 0 and 2 right, 1 wrong.
        let mut quiz = build_quiz(3);
        quiz.select_option(0).unwrap();
        assert_eq!(quiz.advance().unwrap(), QuizOutcome::Continue);
        quiz.select_option(3).unwrap();
        assert_eq!(quiz.advance().unwrap(), QuizOutcome::Continue);
        quiz.select_option(2).unwrap();
        assert_eq!(
            quiz.advance().unwrap(),
            QuizOutcome::Completed { score: 2 }
        );

        assert!(quiz.is_complete());
        assert_eq!(quiz.score(), Some(2));
        assert_eq!(quiz.percentage(), Some(67));
    }

    #[test]
    fn score_is_bounded_by_question_count() {
        let mut quiz = build_quiz(4);
        for _ in 0..3 {
            quiz.select_option(0).unwrap();
            quiz.advance().unwrap();
        }
        quiz.select_option(0).unwrap();
        let QuizOutcome::Completed { score } = quiz.advance().unwrap() else {
            panic!("expected completion");
        };
        assert!(score <= 4);
        let matching = (0..4)
            .filter(|&i| quiz.selection_correct(i) == Some(true))
            .count();
        assert_eq!(score as usize, matching);
    }

    #[test]
    fn submit_is_rejected_before_last_question() {
        let mut quiz = build_quiz(3);
        quiz.select_option(0).unwrap();
        let err = quiz.submit().unwrap_err();
        assert!(matches!(err, QuizError::NotLastQuestion));
    }

    #[test]
    fn submit_scores_on_last_question() {
        let mut quiz = build_quiz(1);
        quiz.select_option(0).unwrap();
        let score = quiz.submit().unwrap();
        assert_eq!(score, 1);
        assert_eq!(quiz.percentage(), Some(100));
    }

    #[test]
    fn actions_after_completion_are_rejected() {
        let mut quiz = build_quiz(1);
        quiz.select_option(0).unwrap();
        quiz.submit().unwrap();

        assert!(matches!(quiz.select_option(0), Err(QuizError::Completed)));
        assert!(matches!(quiz.advance(), Err(QuizError::Completed)));
        assert!(matches!(quiz.submit(), Err(QuizError::Completed)));
    }

    #[test]
    fn retake_resets_index_and_selections() {
        let mut quiz = build_quiz(2);
        quiz.select_option(0).unwrap();
        quiz.advance().unwrap();
        quiz.select_option(1).unwrap();
        quiz.advance().unwrap();
        assert!(quiz.is_complete());

        quiz.retake().unwrap();
        assert_eq!(quiz.current_index(), 0);
        assert!(!quiz.is_complete());
        assert!(quiz.score().is_none());
        for i in 0..quiz.total_questions() {
            assert_eq!(quiz.selection(i), None);
        }
    }

    #[test]
    fn retake_is_rejected_while_in_progress() {
        let mut quiz = build_quiz(2);
        let err = quiz.retake().unwrap_err();
        assert!(matches!(err, QuizError::InProgress));
    }
}
