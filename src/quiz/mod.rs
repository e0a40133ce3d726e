//! The quiz session state machine

pub mod session;

pub use session::{Grading, Phase, QuizSession};
