use thiserror::Error;

use crate::model::QuestionValidationError;
use crate::quiz::QuizError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    QuestionValidation(#[from] QuestionValidationError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
