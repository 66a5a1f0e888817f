//! Hangman
//!
//! A terminal Hangman game: guess the hidden word of a category one letter at a time
//! before the gallows is complete.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Challenge, GameSession, Letter, Outcome};
//!
//! let mut session = GameSession::with_challenge(Challenge::new("animals", "cat").unwrap());
//! for c in ['c', 'a', 't'] {
//!     session.guess_letter(Letter::new(c).unwrap());
//! }
//! assert_eq!(session.outcome(), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word data
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
