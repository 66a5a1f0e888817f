//! Terminal output formatting
//!
//! Display utilities for the text front end, plus the gallows illustration.

pub mod display;
pub mod formatters;
pub mod gallows;

pub use display::{print_board, print_categories, print_result};
pub use gallows::Gallows;
