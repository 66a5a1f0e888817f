//! Game session state machine
//!
//! A session owns the current challenge, its reveal mask, the mistake count and the
//! guessed letters. `guess_letter` is the only mutating transition besides `reset`.
//!
//! ```text
//! InProgress --hit, mask complete--> Won
//! InProgress --miss, mistakes == 6--> Lost
//! Won | Lost --reset--> InProgress
//! ```

use super::challenge::Challenge;
use super::letter::{Letter, LetterSet};
use super::mask::RevealMask;
use crate::wordlists::WordRepository;
use rand::Rng;
use tracing::{debug, info};

/// Number of wrong guesses that ends the game
pub const MAX_MISTAKES: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What a single guess did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The letter is in the word; `revealed` positions were uncovered
    Hit { revealed: usize },
    Miss,
    /// Ignored: the letter was guessed before
    AlreadyGuessed,
    /// Ignored: the game is already won or lost
    GameOver,
}

/// Display state of a letter control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    Unused,
    Hit,
    Miss,
}

/// State returned to the presentation layer after every guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub verdict: Verdict,
    pub masked_word: String,
    pub mistakes: u8,
    pub outcome: Outcome,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    challenge: Challenge,
    mask: RevealMask,
    mistakes: u8,
    guessed: LetterSet,
    outcome: Outcome,
}

impl GameSession {
    /// Start a session with a challenge drawn from `repository`
    pub fn new<R: Rng + ?Sized>(repository: &WordRepository, rng: &mut R) -> Self {
        Self::with_challenge(repository.draw_challenge(rng))
    }

    /// Start a session for a known challenge
    #[must_use]
    pub fn with_challenge(challenge: Challenge) -> Self {
        info!(category = %challenge.category(), "new game started");
        Self {
            mask: RevealMask::new(challenge.word()),
            challenge,
            mistakes: 0,
            guessed: LetterSet::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Draw a new challenge and return to `InProgress`
    pub fn reset<R: Rng + ?Sized>(&mut self, repository: &WordRepository, rng: &mut R) {
        *self = Self::new(repository, rng);
    }

    /// Apply a guess and report the resulting state
    ///
    /// Guessing after the game ended or repeating a letter leaves the state unchanged.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Challenge, GameSession, Letter, Outcome};
    ///
    /// let mut session = GameSession::with_challenge(Challenge::new("animals", "cat").unwrap());
    /// let report = session.guess_letter(Letter::new('c').unwrap());
    /// assert_eq!(report.masked_word, "C**");
    /// assert_eq!(report.outcome, Outcome::InProgress);
    /// ```
    pub fn guess_letter(&mut self, letter: Letter) -> GuessReport {
        let verdict = self.apply(letter);
        debug!(%letter, ?verdict, mistakes = self.mistakes, "letter guessed");

        if matches!(verdict, Verdict::Hit { .. } | Verdict::Miss) && self.outcome.is_terminal() {
            info!(
                outcome = ?self.outcome,
                word = %self.challenge.word(),
                mistakes = self.mistakes,
                "game finished"
            );
        }

        self.report(verdict)
    }

    fn apply(&mut self, letter: Letter) -> Verdict {
        if self.outcome.is_terminal() {
            return Verdict::GameOver;
        }
        if !self.guessed.insert(letter) {
            return Verdict::AlreadyGuessed;
        }

        if self.challenge.contains(letter) {
            let revealed = self.mask.reveal(letter);
            if self.mask.is_complete() {
                self.outcome = Outcome::Won;
            }
            Verdict::Hit { revealed }
        } else {
            self.mistakes += 1;
            if self.mistakes >= MAX_MISTAKES {
                self.outcome = Outcome::Lost;
            }
            Verdict::Miss
        }
    }

    fn report(&self, verdict: Verdict) -> GuessReport {
        GuessReport {
            verdict,
            masked_word: self.mask.to_string(),
            mistakes: self.mistakes,
            outcome: self.outcome,
        }
    }

    /// Whether a letter control should be shown as unused, hit or missed
    #[must_use]
    pub fn letter_state(&self, letter: Letter) -> LetterState {
        if !self.guessed.contains(letter) {
            LetterState::Unused
        } else if self.challenge.contains(letter) {
            LetterState::Hit
        } else {
            LetterState::Miss
        }
    }

    #[must_use]
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    #[must_use]
    pub fn masked_word(&self) -> String {
        self.mask.to_string()
    }

    #[must_use]
    pub const fn mistakes(&self) -> u8 {
        self.mistakes
    }

    #[must_use]
    pub const fn remaining_mistakes(&self) -> u8 {
        MAX_MISTAKES.saturating_sub(self.mistakes)
    }

    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }
}
