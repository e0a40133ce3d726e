//! Chapter catalog
//!
//! The fixed list of chapters shown in the menu. Entries either name a CSV
//! source (resolved against the configured questions directory) or have none
//! yet and render as a disabled placeholder.

use std::path::{Path, PathBuf};

/// A chapter in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterEntry {
    /// Display title
    pub title: &'static str,
    /// CSV file name under the questions directory, if one exists yet
    pub source: Option<&'static str>,
}

impl ChapterEntry {
    /// Whether a question source backs this chapter
    pub fn is_available(&self) -> bool {
        self.source.is_some()
    }

    /// Absolute path to this chapter's source, if any
    pub fn source_path(&self, questions_dir: &Path) -> Option<PathBuf> {
        self.source.map(|name| questions_dir.join(name))
    }
}

const CHAPTERS: [ChapterEntry; 9] = [
    ChapterEntry {
        title: "Chapter 1 - Introduction to ESG Investing",
        source: Some("chapter1.csv"),
    },
    ChapterEntry { title: "Chapter 2 - The ESG Market", source: Some("chapter2.csv") },
    ChapterEntry { title: "Chapter 3 - Environmental Factors", source: None },
    ChapterEntry { title: "Chapter 4 - Social Factors", source: None },
    ChapterEntry { title: "Chapter 5 - Governance Factors", source: None },
    ChapterEntry { title: "Chapter 6 - Engagement and Stewardship", source: None },
    ChapterEntry {
        title: "Chapter 7 - ESG Analysis, Valuation, and Integration",
        source: None,
    },
    ChapterEntry {
        title: "Chapter 8 - Integrated Portfolio Construction and Management",
        source: None,
    },
    ChapterEntry {
        title: "Chapter 9 - Investment Mandates, Portfolio Analytics, and Client Reporting",
        source: None,
    },
];

/// All chapters in menu order
pub fn chapters() -> &'static [ChapterEntry] {
    &CHAPTERS
}
