//! Running score bar
//!
//! A two-segment proportional bar: the green share is the fraction of
//! answered questions graded correct, the red share the rest. The two
//! segments always fill the full bar width. Below it a caption reads
//! `Correct: X / Y (Z.Z%)`.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::theme::Theme;

/// Split `width` cells between the correct and incorrect segments
///
/// The segments always sum to `width`. `answered` must be non-zero.
pub fn segment_widths(score: usize, answered: usize, width: u16) -> (u16, u16) {
    debug_assert!(score <= answered && answered > 0);
    let correct = (score as f64 / answered as f64 * f64::from(width)).round() as u16;
    let correct = correct.min(width);
    (correct, width - correct)
}

/// Caption text, percentage to one decimal place
pub fn caption(score: usize, answered: usize) -> String {
    let percent = score as f64 / answered as f64 * 100.0;
    format!("Correct: {} / {} ({:.1}%)", score, answered, percent)
}

/// Bar and caption lines, or empty when nothing has been answered yet
pub fn lines(score: usize, answered: usize, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    if answered == 0 {
        return Vec::new();
    }

    let (correct, incorrect) = segment_widths(score, answered, width);
    let bar = Line::from(vec![
        Span::styled(" ".repeat(correct as usize), Style::default().bg(theme.success)),
        Span::styled(" ".repeat(incorrect as usize), Style::default().bg(theme.error)),
    ]);
    let caption_line =
        Line::from(Span::styled(caption(score, answered), Style::default().fg(theme.fg_secondary)));

    vec![bar, caption_line]
}
