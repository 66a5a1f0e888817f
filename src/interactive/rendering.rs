//! TUI rendering with ratatui
//!
//! The layout helpers are shared with mouse handling so clicks land on the same
//! rectangles that were drawn.

use super::app::{App, Control, InputMode, MessageStyle};
use crate::core::{Letter, LetterState, Outcome};
use crate::output::formatters::{lives_bar, outcome_message, spaced};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

const PRIMARY: Color = Color::Rgb(0x1F, 0x57, 0x76);
const SECONDARY: Color = Color::Red;

const KEYBOARD_ROWS: usize = 4;
const KEYBOARD_COLUMNS: usize = 7;
const BUTTON_HEIGHT: u16 = 3;

const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 9;
const RESTART_WIDTH: u16 = 13;

/// Screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub header: Rect,
    pub gallows: Rect,
    pub board: Rect,
    pub keyboard: Rect,
    pub status: Rect,
}

#[must_use]
pub fn screen_layout(area: Rect) -> Screen {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                    // Header
            Constraint::Min(9),                                       // Gallows and word
            Constraint::Length(BUTTON_HEIGHT * KEYBOARD_ROWS as u16), // Letter buttons
            Constraint::Length(1),                                    // Status bar
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(20)])
        .split(chunks[1]);

    Screen {
        header: chunks[0],
        gallows: main[0],
        board: main[1],
        keyboard: chunks[2],
        status: chunks[3],
    }
}

/// Button order: A-Z, then Reset and Quit, filling a 4x7 grid row by row
pub fn keyboard_controls() -> impl Iterator<Item = Control> {
    Letter::all()
        .map(Control::Letter)
        .chain([Control::Reset, Control::Quit])
}

/// Rectangles of every board button inside `keyboard`
#[must_use]
pub fn keyboard_buttons(keyboard: Rect) -> Vec<(Control, Rect)> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(BUTTON_HEIGHT); KEYBOARD_ROWS])
        .split(keyboard);

    let cells = rows.iter().flat_map(|&row| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, KEYBOARD_COLUMNS as u32); KEYBOARD_COLUMNS])
            .split(row)
            .to_vec()
    });

    keyboard_controls().zip(cells).collect()
}

/// Area of the modal result dialog
#[must_use]
pub fn dialog_area(area: Rect) -> Rect {
    let width = DIALOG_WIDTH.min(area.width);
    let height = DIALOG_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Dialog rows: message, word, spacer, restart button, hint
fn dialog_rows(dialog: Rect) -> [Rect; 5] {
    let inner = Block::default().borders(Borders::ALL).inner(dialog);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .split(inner);
    [rows[0], rows[1], rows[2], rows[3], rows[4]]
}

#[must_use]
pub fn restart_button(area: Rect) -> Rect {
    let row = dialog_rows(dialog_area(area))[3];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(RESTART_WIDTH),
            Constraint::Min(0),
        ])
        .split(row);
    columns[1]
}

/// Which control, if any, is drawn at `position`
#[must_use]
pub fn control_at(area: Rect, mode: InputMode, position: Position) -> Option<Control> {
    match mode {
        InputMode::ResultDialog => restart_button(area)
            .contains(position)
            .then_some(Control::Restart),
        InputMode::Playing => keyboard_buttons(screen_layout(area).keyboard)
            .into_iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(control, _)| control),
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let screen = screen_layout(f.area());

    render_header(f, screen.header);
    render_gallows(f, app, screen.gallows);
    render_board(f, app, screen.board);
    render_keyboard(f, app, screen.keyboard);
    render_status(f, app, screen.status);

    if app.input_mode == InputMode::ResultDialog {
        render_result_dialog(f, app, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let color = if app.session.mistakes() == 0 {
        Color::White
    } else {
        Color::Yellow
    };

    let gallows = Paragraph::new(app.gallows.frame(app.session.mistakes()))
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(gallows, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Category
            Constraint::Length(3), // Masked word
            Constraint::Length(1), // Lives
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    let category = Paragraph::new(app.session.challenge().category())
        .style(
            Style::default()
                .fg(Color::White)
                .bg(SECONDARY)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(category, chunks[0]);

    let word = Paragraph::new(spaced(&app.session.masked_word()))
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(word, chunks[1]);

    let lives = Paragraph::new(Line::from(vec![
        Span::raw("Lives: "),
        Span::styled(
            lives_bar(app.session.mistakes()),
            Style::default().fg(Color::Red),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(lives, chunks[2]);

    render_messages(f, app, chunks[3]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    for (control, rect) in keyboard_buttons(area) {
        let (label, color, enabled) = match control {
            Control::Letter(letter) => match app.session.letter_state(letter) {
                LetterState::Unused => (letter.to_string(), PRIMARY, true),
                LetterState::Hit => (letter.to_string(), Color::Green, false),
                LetterState::Miss => (letter.to_string(), Color::Red, false),
            },
            Control::Reset => ("Reset".to_string(), SECONDARY, true),
            Control::Quit => ("Quit".to_string(), SECONDARY, true),
            Control::Restart => continue,
        };

        let mut style = Style::default().fg(Color::White).bg(color);
        if enabled {
            style = style.add_modifier(Modifier::BOLD);
        } else {
            style = style.add_modifier(Modifier::DIM);
        }

        let button = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).style(style));
        f.render_widget(button, rect);
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let streak_text = format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.best_streak
    );
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Playing => "a-z: Guess | F5/Ctrl+R: Reset | Esc: Quit",
        InputMode::ResultDialog => "Enter: Restart | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_result_dialog(f: &mut Frame, app: &App, area: Rect) {
    let outcome = app.session.outcome();
    let color = if outcome == Outcome::Won {
        Color::Green
    } else {
        Color::Red
    };

    let dialog = dialog_area(area);
    f.render_widget(Clear, dialog);
    f.render_widget(
        Block::default()
            .title(" Result ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
        dialog,
    );

    let rows = dialog_rows(dialog);
    f.render_widget(
        Paragraph::new(outcome_message(outcome))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(format!("Word: {}", app.session.challenge().word()))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center),
        rows[1],
    );

    let button_style = Style::default()
        .fg(Color::White)
        .bg(SECONDARY)
        .add_modifier(Modifier::BOLD);
    f.render_widget(
        Paragraph::new("Restart")
            .style(button_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).style(button_style)),
        restart_button(area),
    );

    f.render_widget(
        Paragraph::new("Enter: restart | q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        rows[4],
    );
}
