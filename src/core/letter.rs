//! Guessable letters
//!
//! A `Letter` is one of the 26 uppercase ASCII letters; a `LetterSet` tracks which
//! letters have been guessed using a 26-bit mask.

use crate::error::LetterError;
use std::fmt;

/// A single uppercase letter A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` for anything outside `a-z` / `A-Z`.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// let letter = Letter::new('q').unwrap();
    /// assert_eq!(letter.as_char(), 'Q');
    ///
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase() as u8))
        } else {
            Err(LetterError::NotAlphabetic(c))
        }
    }

    /// Parse a single-letter string such as `"e"` (surrounding whitespace ignored)
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` if the input is not exactly one letter.
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            (Some(c), Some(_)) => Err(LetterError::NotAlphabetic(c)),
            (None, _) => Err(LetterError::NotAlphabetic(' ')),
        }
    }

    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based position in the alphabet (A = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Set of guessed letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Insert a letter, returning `false` if it was already present
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1 << letter.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Guessed letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |&letter| self.contains(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_normalizes_to_uppercase() {
        assert_eq!(Letter::new('a').unwrap().as_char(), 'A');
        assert_eq!(Letter::new('Z').unwrap().as_char(), 'Z');
    }

    #[test]
    fn letter_rejects_non_alphabetic() {
        assert_eq!(Letter::new('1'), Err(LetterError::NotAlphabetic('1')));
        assert_eq!(Letter::new(' '), Err(LetterError::NotAlphabetic(' ')));
        assert!(Letter::new('é').is_err());
    }

    #[test]
    fn letter_parse_single_character() {
        assert_eq!(Letter::parse(" e ").unwrap().as_char(), 'E');
        assert!(Letter::parse("").is_err());
        assert!(Letter::parse("ab").is_err());
    }

    #[test]
    fn letter_index_and_all() {
        let all: Vec<Letter> = Letter::all().collect();
        assert_eq!(all.len(), 26);
        assert_eq!(all[0].index(), 0);
        assert_eq!(all[25].as_char(), 'Z');
        assert_eq!(all[25].index(), 25);
    }

    #[test]
    fn letter_set_insert_reports_duplicates() {
        let mut set = LetterSet::new();
        let c = Letter::new('c').unwrap();

        assert!(set.is_empty());
        assert!(set.insert(c));
        assert!(!set.insert(c));
        assert!(set.contains(c));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn letter_set_iterates_alphabetically() {
        let mut set = LetterSet::new();
        for c in ['z', 'a', 'm'] {
            set.insert(Letter::new(c).unwrap());
        }

        let letters: String = set.iter().map(Letter::as_char).collect();
        assert_eq!(letters, "AMZ");

        set.clear();
        assert!(set.is_empty());
    }
}
