use speech_core::model::Question;
use speech_core::quiz::{QuizError, QuizOutcome, QuizSession};

/// View-model over the quiz state machine.
///
/// The views never touch `QuizSession` directly; each render takes a
/// [`QuizStage`] snapshot so no borrow is held while rsx closures run.
pub struct QuizVm {
    session: QuizSession,
}

/// Per-question segment of the progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    Done,
    Current,
    Upcoming,
    Correct,
    Incorrect,
}

impl Segment {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Segment::Done => "quiz-segment quiz-segment--done",
            Segment::Current => "quiz-segment quiz-segment--current",
            Segment::Upcoming => "quiz-segment",
            Segment::Correct => "quiz-segment quiz-segment--correct",
            Segment::Incorrect => "quiz-segment quiz-segment--incorrect",
        }
    }
}

/// Everything the in-progress view needs for the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCard {
    /// 1-based position, ready for display.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
    pub is_last: bool,
    pub segments: Vec<Segment>,
}

/// One line of the post-completion answer review.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRow {
    pub prompt: String,
    pub selected_text: String,
    pub correct_text: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreCard {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
    pub rows: Vec<ReviewRow>,
    pub segments: Vec<Segment>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizStage {
    InProgress(QuestionCard),
    Completed(ScoreCard),
}

impl QuizVm {
    /// # Errors
    ///
    /// Returns `QuizError::Empty` for an empty question list; the quiz view
    /// redirects away instead of rendering.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        Ok(Self {
            session: QuizSession::new(questions)?,
        })
    }

    #[must_use]
    pub fn stage(&self) -> QuizStage {
        if self.session.is_complete() {
            QuizStage::Completed(self.score_card())
        } else {
            QuizStage::InProgress(self.question_card())
        }
    }

    pub fn select(&mut self, option: usize) {
        if let Err(err) = self.session.select_option(option) {
            tracing::warn!(%err, option, "selection ignored");
        }
    }

    /// Advance or score. A missing selection is a no-op; the button is
    /// disabled in that state anyway.
    pub fn advance(&mut self) {
        match self.session.advance() {
            Ok(QuizOutcome::Continue | QuizOutcome::Completed { .. }) => {}
            Err(err) => tracing::warn!(%err, "advance ignored"),
        }
    }

    pub fn submit(&mut self) {
        if let Err(err) = self.session.submit() {
            tracing::warn!(%err, "submit ignored");
        }
    }

    pub fn retake(&mut self) {
        if let Err(err) = self.session.retake() {
            tracing::warn!(%err, "retake ignored");
        }
    }

    fn question_card(&self) -> QuestionCard {
        let question = self.session.current_question();
        let index = self.session.current_index();
        let total = self.session.total_questions();
        QuestionCard {
            number: index + 1,
            total,
            prompt: question.prompt().to_string(),
            options: question.options().to_vec(),
            selected: self.session.current_selection(),
            is_last: self.session.is_last_question(),
            segments: (0..total)
                .map(|i| {
                    if i == index {
                        Segment::Current
                    } else if i < index {
                        Segment::Done
                    } else {
                        Segment::Upcoming
                    }
                })
                .collect(),
        }
    }

    fn score_card(&self) -> ScoreCard {
        let total = self.session.total_questions();
        let rows = self
            .session
            .questions()
            .iter()
            .enumerate()
            .map(|(i, question)| {
                let selected = self.session.selection(i);
                let selected_text = selected
                    .and_then(|s| question.options().get(s).cloned())
                    .unwrap_or_else(|| "—".to_string());
                ReviewRow {
                    prompt: question.prompt().to_string(),
                    selected_text,
                    correct_text: question.options()[question.correct()].clone(),
                    is_correct: self.session.selection_correct(i) == Some(true),
                }
            })
            .collect();

        ScoreCard {
            score: self.session.score().unwrap_or(0),
            total,
            percentage: self.session.percentage().unwrap_or(0),
            rows,
            segments: (0..total)
                .map(|i| {
                    if self.session.selection_correct(i) == Some(true) {
                        Segment::Correct
                    } else {
                        Segment::Incorrect
                    }
                })
                .collect(),
        }
    }
}
