//! End-of-quiz summary overlay

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::{layout::centered_rect, score_bar};
use crate::quiz::QuizSession;
use crate::theme::Theme;

/// Draw the finished screen: completion notice, score bar, menu hint
pub fn draw(frame: &mut Frame, session: &QuizSession, theme: &Theme) {
    let overlay_area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Quiz Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quiz finished! You've gone through all the questions.",
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    lines.extend(score_bar::lines(
        session.score(),
        session.answered_count(),
        inner.width,
        theme,
    ));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Back to Main Menu",
        Style::default().fg(theme.fg_muted),
    )));

    let para =
        Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}
