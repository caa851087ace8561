#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod quiz;
pub mod time;

pub use error::Error;
pub use quiz::{QuizError, QuizOutcome, QuizSession};
pub use time::Clock;
