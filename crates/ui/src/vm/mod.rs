mod quiz_vm;
mod time_fmt;
mod upload_vm;

pub use quiz_vm::{QuestionCard, QuizStage, QuizVm, ReviewRow, ScoreCard, Segment};
pub use time_fmt::format_date;
pub use upload_vm::{StatusKind, StatusMessage, SubmissionState};
