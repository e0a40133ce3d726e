//! Question data model
//!
//! Defines the records parsed from a chapter's question source and the
//! shuffled set a quiz session runs against.

use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::{Deserialize, Serialize};

/// One of the four answer slots of a multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl AnswerKey {
    /// All keys in display order
    pub const ALL: [AnswerKey; 4] = [AnswerKey::A, AnswerKey::B, AnswerKey::C, AnswerKey::D];

    /// Zero-based position of this key (A = 0)
    pub fn index(self) -> usize {
        match self {
            AnswerKey::A => 0,
            AnswerKey::B => 1,
            AnswerKey::C => 2,
            AnswerKey::D => 3,
        }
    }

    /// Key at the given zero-based position, if within A-D
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The letter used in labels and the CSV `correctAnswer` column
    pub fn as_char(self) -> char {
        match self {
            AnswerKey::A => 'A',
            AnswerKey::B => 'B',
            AnswerKey::C => 'C',
            AnswerKey::D => 'D',
        }
    }
}

impl std::fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single question as loaded from a chapter source
///
/// Immutable once loaded; the session only reads from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Question text
    #[serde(rename = "question")]
    pub text: String,
    /// Option texts, indexed by `AnswerKey`
    #[serde(rename = "optionA")]
    pub option_a: String,
    #[serde(rename = "optionB")]
    pub option_b: String,
    #[serde(rename = "optionC")]
    pub option_c: String,
    #[serde(rename = "optionD")]
    pub option_d: String,
    /// Which option is correct
    #[serde(rename = "correctAnswer")]
    pub correct: AnswerKey,
    /// Shown after the question is graded
    pub explanation: String,
}

impl QuestionRecord {
    /// Option text for the given key
    pub fn option(&self, key: AnswerKey) -> &str {
        match key {
            AnswerKey::A => &self.option_a,
            AnswerKey::B => &self.option_b,
            AnswerKey::C => &self.option_c,
            AnswerKey::D => &self.option_d,
        }
    }

    /// Display label for an option, e.g. `"B) Berlin"`
    pub fn label(&self, key: AnswerKey) -> String {
        format!("{}) {}", key, self.option(key))
    }

    /// Label of the correct option
    pub fn correct_label(&self) -> String {
        self.label(self.correct)
    }
}

/// The ordered questions a session runs against
///
/// The order is fixed at construction. `shuffled` computes the permutation
/// once; it is never recomputed for the lifetime of the session.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    questions: Vec<QuestionRecord>,
}

impl QuestionSet {
    /// Build a set with a one-time random permutation of the records
    pub fn shuffled(mut questions: Vec<QuestionRecord>) -> Self {
        questions.shuffle(&mut thread_rng());
        Self { questions }
    }

    /// Build a set preserving source order
    pub fn in_order(questions: Vec<QuestionRecord>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.questions.get(index)
    }
}
