//! Application shell: terminal lifecycle, event loop, and key dispatch

pub mod input;
pub mod state;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::bank::{QuestionBank, QuestionSet, catalog};
use crate::config::Config;
use crate::quiz::{Phase, QuizSession};
use crate::theme::Theme;
use crate::ui;
use input::Action;
use state::{AppState, Screen};

/// What a quiz-screen action did with the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizOutcome {
    Stay,
    ToMenu,
}

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Active theme
    theme: Theme,

    /// Current application state
    state: AppState,

    /// Question loader with its per-chapter cache
    bank: QuestionBank,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let theme = config.active_theme();

        Ok(Self { config, theme, state: AppState::default(), bank: QuestionBank::new(), terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            self.terminal.draw(|frame| {
                ui::draw(frame, &self.state, &self.theme);
            })?;

            if event::poll(std::time::Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match self.handle_key(key.code) {
                            Ok(true) => break, // Exit requested
                            Ok(false) => {}    // Continue
                            Err(e) => {
                                tracing::error!("Error handling key: {}", e);
                            }
                        }
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Handle a key press, returns true if should exit
    fn handle_key(&mut self, key: KeyCode) -> Result<bool> {
        let Some(action) = input::key_to_action(key) else {
            return Ok(false);
        };

        match self.state.screen {
            Screen::Menu => self.handle_menu_action(action),
            Screen::Quiz => {
                let Some(session) = self.state.session.as_mut() else {
                    // Quiz screen with no session is unreachable via transitions
                    self.state.reset_to_menu();
                    return Ok(false);
                };
                if apply_quiz_action(session, action) == QuizOutcome::ToMenu {
                    self.state.reset_to_menu();
                }
                Ok(false)
            }
        }
    }

    /// Handle an action on the chapter menu, returns true if should exit
    fn handle_menu_action(&mut self, action: Action) -> Result<bool> {
        let chapters = catalog::chapters();
        match action {
            Action::Up => self.state.menu.move_up(),
            Action::Down => self.state.menu.move_down(chapters.len()),
            Action::Select => self.start_chapter()?,
            Action::Back => self.state.menu.clear_notice(),
            Action::Quit => return Ok(true),
            Action::Next => {}
        }
        Ok(false)
    }

    /// Load the highlighted chapter and start a session for it
    fn start_chapter(&mut self) -> Result<()> {
        let entry = catalog::chapters()[self.state.menu.selected_index];

        let Some(path) = entry.source_path(&self.config.questions_dir()?) else {
            self.state.menu.set_notice("No question set attached to this chapter yet.");
            return Ok(());
        };

        match self.bank.load(&path) {
            Ok(records) => {
                let session = QuizSession::new(QuestionSet::shuffled(records.to_vec()));
                tracing::info!(chapter = entry.title, questions = session.len(), "starting quiz");
                self.state.session = Some(session);
                self.state.screen = Screen::Quiz;
                self.state.menu.clear_notice();
            }
            Err(e) => {
                tracing::warn!(chapter = entry.title, error = %e, "failed to load chapter");
                self.state.menu.set_error(e.to_string());
            }
        }
        Ok(())
    }
}

/// Apply a quiz-screen action to the session
fn apply_quiz_action(session: &mut QuizSession, action: Action) -> QuizOutcome {
    match (session.phase(), action) {
        (_, Action::Back) => return QuizOutcome::ToMenu,
        (Phase::Finished, Action::Select | Action::Next) => return QuizOutcome::ToMenu,
        (Phase::AwaitingAnswer, Action::Up) | (Phase::Submitted, Action::Up) => {
            session.select_prev();
        }
        (Phase::AwaitingAnswer, Action::Down) | (Phase::Submitted, Action::Down) => {
            session.select_next();
        }
        (Phase::AwaitingAnswer, Action::Select) => {
            session.submit();
        }
        (Phase::Submitted, Action::Select | Action::Next) => session.advance(),
        _ => {}
    }
    QuizOutcome::Stay
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
