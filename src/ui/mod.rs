//! UI rendering components

pub mod layout;
pub mod menu;
pub mod question;
pub mod score_bar;
pub mod summary;

use ratatui::Frame;

use crate::app::state::{AppState, Screen};
use crate::quiz::Phase;
use crate::theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) {
    match state.screen {
        Screen::Menu => {
            menu::draw(frame, &state.menu, theme);
        }
        Screen::Quiz => {
            let Some(session) = &state.session else {
                return;
            };
            if session.phase() == Phase::Finished {
                summary::draw(frame, session, theme);
            } else {
                question::draw(frame, session, theme);
            }
        }
    }
}
