//! Quizdeck - a TUI runner for chapter-based multiple-choice quizzes
//!
//! Quizdeck presents shuffled questions from chapter CSV files, grades one
//! selected answer per question with an explanation, tracks a running score,
//! and reports a final summary.

pub mod app;
pub mod bank;
pub mod config;
pub mod quiz;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use theme::Theme;
