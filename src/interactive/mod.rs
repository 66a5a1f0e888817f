//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Control, InputMode, Message, MessageStyle, Statistics, run_tui};
pub use rendering::{Screen, control_at, keyboard_buttons, screen_layout};
