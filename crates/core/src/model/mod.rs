mod ids;
mod question;
mod transcription;
mod user;

pub use ids::RecordId;
pub use question::{Question, QuestionDraft, QuestionValidationError};
pub use transcription::{Transcript, TranscriptionRecord};
pub use user::User;
