//! Application state definitions

use crate::quiz::QuizSession;

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    /// Chapter selection menu
    #[default]
    Menu,
    /// A quiz session is running (question, feedback, or summary view)
    Quiz,
}

/// State for the chapter menu
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    /// Currently highlighted chapter index
    pub selected_index: usize,
    /// Status-line notice (placeholder or load error)
    pub notice: Option<String>,
    /// Whether the notice is an error
    pub is_error: bool,
}

impl MenuState {
    /// Move the highlight up one entry
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move the highlight down one entry, clamped to the catalog length
    pub fn move_down(&mut self, len: usize) {
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Set an informational notice
    pub fn set_notice(&mut self, msg: impl Into<String>) {
        self.notice = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error notice
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.notice = Some(msg.into());
        self.is_error = true;
    }

    /// Clear the notice
    pub fn clear_notice(&mut self) {
        self.notice = None;
        self.is_error = false;
    }
}

/// Full application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Chapter menu state
    pub menu: MenuState,

    /// The running quiz session; present exactly while `screen` is `Quiz`
    pub session: Option<QuizSession>,
}

impl AppState {
    /// Drop the session and return to the menu, discarding all quiz state
    pub fn reset_to_menu(&mut self) {
        self.session = None;
        self.screen = Screen::Menu;
        self.menu.clear_notice();
    }
}
