//! Chapter selection menu

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::MenuState;
use crate::bank::catalog;
use crate::theme::Theme;

/// Draw the chapter menu
pub fn draw(frame: &mut Frame, menu: &MenuState, theme: &Theme) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    draw_chapter_list(frame, chunks[0], menu, theme);
    draw_status_line(frame, chunks[1], menu, theme);
    draw_hints(frame, chunks[2], theme);
}

fn draw_chapter_list(frame: &mut Frame, area: Rect, menu: &MenuState, theme: &Theme) {
    let block = Block::default()
        .title(" Quiz Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Choose which chapter quiz you want to take:",
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, chapter) in catalog::chapters().iter().enumerate() {
        let selected = i == menu.selected_index;
        let cursor = if selected { "\u{25B8} " } else { "  " }; // ▸

        let mut spans = vec![Span::raw(cursor)];
        if chapter.is_available() {
            let style = if selected {
                Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg_secondary)
            };
            spans.push(Span::styled(chapter.title, style));
        } else {
            let style = if selected {
                Style::default().fg(theme.fg_muted).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg_muted)
            };
            spans.push(Span::styled(chapter.title, style));
            spans.push(Span::styled(" (not yet available)", Style::default().fg(theme.fg_muted)));
        }

        let mut line = Line::from(spans);
        if selected {
            line = line.style(Style::default().bg(theme.selection));
        }
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_status_line(frame: &mut Frame, area: Rect, menu: &MenuState, theme: &Theme) {
    let Some(notice) = &menu.notice else {
        return;
    };

    let color = if menu.is_error { theme.error } else { theme.warning };
    let line = Line::from(Span::styled(notice.clone(), Style::default().fg(color)));
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_hints(frame: &mut Frame, area: Rect, theme: &Theme) {
    let hints = Line::from(Span::styled(
        "[j/k] Move    [Enter] Start    [q] Quit",
        Style::default().fg(theme.fg_muted),
    ));
    frame.render_widget(Paragraph::new(hints), area);
}
