//! Reveal mask for the challenge word
//!
//! One slot per character: hidden, revealed, or a space (always shown).

use super::letter::Letter;
use std::fmt;

/// Marker displayed for a letter that has not been guessed yet
pub const HIDDEN_MARKER: char = '*';

/// Hide every non-space character of `word`
///
/// # Examples
/// ```
/// use hangman::core::hide_word;
///
/// assert_eq!(hide_word("NEW ZEALAND"), "*** *******");
/// ```
#[must_use]
pub fn hide_word(word: &str) -> String {
    word.chars()
        .map(|c| if c == ' ' { ' ' } else { HIDDEN_MARKER })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Hidden,
    Revealed(char),
    Space,
}

impl Slot {
    const fn display_char(self) -> char {
        match self {
            Self::Hidden => HIDDEN_MARKER,
            Self::Revealed(c) => c,
            Self::Space => ' ',
        }
    }
}

/// Per-position reveal state of a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealMask {
    word: Vec<char>,
    slots: Vec<Slot>,
}

impl RevealMask {
    /// Initial mask: letters hidden, spaces shown
    #[must_use]
    pub fn new(word: &str) -> Self {
        let word: Vec<char> = word.chars().collect();
        let slots = word
            .iter()
            .map(|&c| if c == ' ' { Slot::Space } else { Slot::Hidden })
            .collect();
        Self { word, slots }
    }

    /// Reveal every position holding `letter`; returns how many were revealed
    pub fn reveal(&mut self, letter: Letter) -> usize {
        let target = letter.as_char();
        let mut revealed = 0;
        for (slot, &c) in self.slots.iter_mut().zip(&self.word) {
            if c == target && *slot == Slot::Hidden {
                *slot = Slot::Revealed(c);
                revealed += 1;
            }
        }
        revealed
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.slots.contains(&Slot::Hidden)
    }
}

impl fmt::Display for RevealMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.display_char())?;
        }
        Ok(())
    }
}
