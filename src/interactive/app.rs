//! TUI application state and logic

use crate::output::formatters::status_message;
use crate::session::{GameStatus, InputEvent, Session, Statistics, Transition};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    pub stats: Statistics,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Map a key press to a session event
///
/// Unmodified or shifted character keys become letter events; the session decides
/// whether it is a letter it accepts. Control and Alt chords are not typing.
#[must_use]
pub fn key_to_event(key: &KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            Some(InputEvent::Letter(c))
        }
        KeyCode::Backspace => Some(InputEvent::Delete),
        KeyCode::Enter => Some(InputEvent::Submit),
        _ => None,
    }
}

impl App {
    #[must_use]
    pub fn new(source: WordSource, rng: StdRng) -> Self {
        let available = source.is_available();
        let mut app = Self {
            session: Session::new(source),
            stats: Statistics::default(),
            messages: Vec::new(),
            should_quit: false,
            rng,
        };

        if available {
            app.add_message("Guess the word in six tries.", MessageStyle::Info);
            app.add_message("Type letters, Backspace to delete, Enter to submit.", MessageStyle::Info);
        } else {
            app.add_message(
                "No word list could be loaded. Guesses cannot be submitted.",
                MessageStyle::Error,
            );
        }

        app
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if self.session.status().is_terminal() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            }
            return;
        }

        if let Some(event) = key_to_event(&key) {
            let transition = self.session.handle(event);
            self.on_transition(transition);
        }
    }

    fn on_transition(&mut self, transition: Transition) {
        match transition {
            Transition::Rejected(rejection) => {
                self.add_message(&rejection.to_string(), MessageStyle::Error);
            }
            Transition::Submitted { status, .. } if status.is_terminal() => {
                self.stats.record(&self.session);

                if let Some(message) = status_message(&self.session) {
                    let style = if self.session.status() == GameStatus::Won {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Error
                    };
                    self.add_message(&message, style);
                }
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            _ => {}
        }
    }

    pub fn new_game(&mut self) {
        let source = self.session.source().reroll(&mut self.rng);
        self.session = Session::new(source);
        self.messages.clear();
        info!(games = self.stats.total_games, "new game started");
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
