//! Question sources: data model, CSV loading, and the chapter catalog

pub mod catalog;
pub mod loader;
pub mod model;

pub use catalog::{ChapterEntry, chapters};
pub use loader::{BankError, QuestionBank};
pub use model::{AnswerKey, QuestionRecord, QuestionSet};
