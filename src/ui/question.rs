//! Question screen: prompt, options, and post-submit feedback

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::score_bar;
use crate::bank::AnswerKey;
use crate::quiz::{Grading, QuizSession};
use crate::theme::Theme;

/// Draw the current question with options and, once graded, feedback
pub fn draw(frame: &mut Frame, session: &QuizSession, theme: &Theme) {
    let area = frame.area();

    let block = Block::default()
        .title(" Quiz ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(question) = session.current_question() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Question {} of {}", session.display_index() + 1, session.len()),
            Style::default().fg(theme.fg_muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.text.clone(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    lines.extend(option_lines(session, theme));
    lines.push(Line::from(""));

    if let Some(grading) = session.grading() {
        lines.extend(feedback_lines(grading, theme));
        lines.push(Line::from(""));
        lines.extend(score_bar::lines(
            session.score(),
            session.answered_count(),
            inner.width,
            theme,
        ));
        lines.push(Line::from(""));
        lines.push(hint_line("[Enter] Next Question    [Esc] Main Menu", theme));
    } else {
        lines.push(hint_line("[j/k] Select    [Enter] Submit    [Esc] Main Menu", theme));
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}

/// Radio-style option rows, cursor on the effective selection
fn option_lines(session: &QuizSession, theme: &Theme) -> Vec<Line<'static>> {
    let Some(question) = session.current_question() else {
        return Vec::new();
    };

    let selected = session.effective_selection();
    let mut lines = Vec::new();

    for key in AnswerKey::ALL {
        let is_selected = key == selected;
        let prefix = if is_selected { "\u{25CF}" } else { "\u{25CB}" }; // ● or ○

        let style = if is_selected {
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_secondary)
        };

        lines.push(Line::from(Span::styled(
            format!("  {} {}", prefix, question.label(key)),
            style,
        )));
    }

    lines
}

/// Correct/incorrect verdict plus the record's explanation
fn feedback_lines(grading: &Grading, theme: &Theme) -> Vec<Line<'static>> {
    let verdict = if grading.correct {
        Line::from(Span::styled(
            "Correct! \u{2713}",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("Incorrect! The correct answer is {}", grading.correct_label),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ))
    };

    vec![
        verdict,
        Line::from(""),
        Line::from(Span::styled(
            format!("Explanation: {}", grading.explanation),
            Style::default().fg(theme.info),
        )),
    ]
}

fn hint_line(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(theme.fg_muted)))
}
