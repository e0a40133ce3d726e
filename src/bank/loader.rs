//! CSV question-source loading
//!
//! Chapter sources are fixed-schema CSV files with the exact header
//! `question, optionA, optionB, optionC, optionD, correctAnswer, explanation`.
//! Parsed results are cached per path so re-selecting the same chapter does
//! not re-parse the file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use thiserror::Error;

use super::model::QuestionRecord;

/// Columns every question source must carry
pub const REQUIRED_COLUMNS: [&str; 7] =
    ["question", "optionA", "optionB", "optionC", "optionD", "correctAnswer", "explanation"];

/// Errors raised while resolving or parsing a question source
#[derive(Debug, Error)]
pub enum BankError {
    /// The chapter points at a file that does not exist
    #[error("question source not found: {0}")]
    SourceNotFound(PathBuf),

    /// A required column is absent from the header row
    #[error("question source is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A row failed to parse (bad field count, answer letter outside A-D, ...)
    #[error("malformed question data: {0}")]
    Malformed(#[from] csv::Error),

    /// The source parsed cleanly but contains no questions
    #[error("question source contains no questions")]
    Empty,
}

/// Loads question sources and caches parsed results per path
#[derive(Debug, Default)]
pub struct QuestionBank {
    cache: HashMap<PathBuf, Vec<QuestionRecord>>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the questions behind `path`, parsing at most once per path
    pub fn load(&mut self, path: &Path) -> Result<&[QuestionRecord], BankError> {
        if !self.cache.contains_key(path) {
            let records = parse_source(path)?;
            tracing::debug!(path = %path.display(), count = records.len(), "parsed question source");
            self.cache.insert(path.to_path_buf(), records);
        }
        Ok(&self.cache[path])
    }

    /// Whether a parsed copy of `path` is already cached
    pub fn is_cached(&self, path: &Path) -> bool {
        self.cache.contains_key(path)
    }
}

/// Parse a question source from disk
pub fn parse_source(path: &Path) -> Result<Vec<QuestionRecord>, BankError> {
    if !path.exists() {
        return Err(BankError::SourceNotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(BankError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }

    if records.is_empty() {
        return Err(BankError::Empty);
    }

    Ok(records)
}
