//! TUI application state and logic

use super::rendering::control_at;
use crate::core::{GameSession, Letter, Outcome, Verdict};
use crate::output::Gallows;
use crate::output::formatters::outcome_message;
use crate::wordlists::WordRepository;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Position, Rect},
};
use std::io;
use tracing::{debug, info};

/// A button on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Letter(Letter),
    Reset,
    Quit,
    /// The button in the result dialog
    Restart,
}

/// Application state
pub struct App<'a> {
    pub repository: &'a WordRepository,
    pub session: GameSession,
    pub gallows: Gallows,
    pub rng: StdRng,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    ResultDialog,
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

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => {
                self.total_games += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
            }
            Outcome::Lost => {
                self.total_games += 1;
                self.current_streak = 0;
            }
            Outcome::InProgress => {}
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(repository: &'a WordRepository, gallows: Gallows, mut rng: StdRng) -> Self {
        let session = GameSession::new(repository, &mut rng);

        Self {
            repository,
            session,
            gallows,
            rng,
            input_mode: InputMode::Playing,
            messages: vec![Message {
                text: "Guess the word! Type a letter or click a button.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    pub fn handle_control(&mut self, control: Control) {
        debug!(?control, mode = ?self.input_mode, "control selected");

        match (self.input_mode, control) {
            (_, Control::Quit) => self.should_quit = true,
            (InputMode::Playing, Control::Letter(letter)) => self.guess(letter),
            (InputMode::Playing, Control::Reset) | (InputMode::ResultDialog, Control::Restart) => {
                self.new_game();
            }
            // The dialog is modal; the board is inactive until it closes
            (InputMode::ResultDialog, _) | (InputMode::Playing, Control::Restart) => {}
        }
    }

    pub fn guess(&mut self, letter: Letter) {
        let report = self.session.guess_letter(letter);

        match report.verdict {
            Verdict::Hit { revealed } => self.add_message(
                &format!("{letter} appears {revealed} time(s)"),
                MessageStyle::Success,
            ),
            Verdict::Miss => self.add_message(
                &format!(
                    "No {letter} in the word ({} mistakes left)",
                    self.session.remaining_mistakes()
                ),
                MessageStyle::Error,
            ),
            Verdict::AlreadyGuessed | Verdict::GameOver => return,
        }

        if report.outcome.is_terminal() {
            self.stats.record(report.outcome);
            let style = if report.outcome == Outcome::Won {
                MessageStyle::Success
            } else {
                MessageStyle::Error
            };
            self.add_message(outcome_message(report.outcome), style);
            self.input_mode = InputMode::ResultDialog;
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset(self.repository, &mut self.rng);
        self.input_mode = InputMode::Playing;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        let control = match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if ctrl => Some(Control::Quit),
            (InputMode::Playing, KeyCode::Esc) => Some(Control::Quit),
            (InputMode::Playing, KeyCode::F(5)) => Some(Control::Reset),
            (InputMode::Playing, KeyCode::Char('r')) if ctrl => Some(Control::Reset),
            (InputMode::Playing, KeyCode::Char(c)) if !ctrl => {
                Letter::new(c).ok().map(Control::Letter)
            }
            (InputMode::ResultDialog, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('r' | 'R')) => {
                Some(Control::Restart)
            }
            (InputMode::ResultDialog, KeyCode::Char('q' | 'Q')) => Some(Control::Quit),
            _ => None,
        };

        if let Some(control) = control {
            self.handle_control(control);
        }
    }

    /// Handle a mouse event; `area` is the full terminal area the UI was drawn in
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);
        if let Some(control) = control_at(area, self.input_mode, position) {
            self.handle_control(control);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }

        if app.should_quit {
            info!(
                games = app.stats.total_games,
                won = app.stats.games_won,
                "quitting"
            );
            break;
        }
    }

    Ok(())
}
