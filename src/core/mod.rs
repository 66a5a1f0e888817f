//! Core domain types for Hangman
//!
//! Letters, challenges, reveal masks and the game session state machine. Nothing in
//! here knows about terminals or input devices.

mod challenge;
mod letter;
mod mask;
mod session;

pub use challenge::Challenge;
pub(crate) use challenge::is_guessable_word;
pub use letter::{Letter, LetterSet};
pub use mask::{HIDDEN_MARKER, RevealMask, hide_word};
pub use session::{GameSession, GuessReport, LetterState, MAX_MISTAKES, Outcome, Verdict};
