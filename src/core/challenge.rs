//! The (category, word) pair a player must guess

use super::letter::Letter;
use crate::error::ChallengeError;
use std::fmt;

/// An immutable category hint and its hidden word, both uppercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    category: String,
    word: String,
}

/// True for text made of ASCII letters and spaces with at least one letter
pub(crate) fn is_guessable_word(word: &str) -> bool {
    word.chars().all(|c| c == ' ' || c.is_ascii_alphabetic())
        && word.chars().any(|c| c.is_ascii_alphabetic())
}

impl Challenge {
    /// Create a challenge, normalizing both parts to uppercase
    ///
    /// # Errors
    /// Returns `ChallengeError` if the category is blank or the word has no letter or
    /// contains anything other than ASCII letters and spaces.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Challenge;
    ///
    /// let challenge = Challenge::new("animals", "cat").unwrap();
    /// assert_eq!(challenge.category(), "ANIMALS");
    /// assert_eq!(challenge.word(), "CAT");
    ///
    /// assert!(Challenge::new("food", "café").is_err());
    /// ```
    pub fn new(category: impl AsRef<str>, word: impl AsRef<str>) -> Result<Self, ChallengeError> {
        let category = category.as_ref().trim();
        if category.is_empty() {
            return Err(ChallengeError::EmptyCategory);
        }
        let word = word.as_ref();
        if !is_guessable_word(word) {
            return Err(ChallengeError::InvalidWord(word.to_string()));
        }
        Ok(Self::from_loaded(category, word))
    }

    /// Build from repository entries, which the loader has already validated
    pub(crate) fn from_loaded(category: &str, word: &str) -> Self {
        Self {
            category: category.to_uppercase(),
            word: word.to_ascii_uppercase(),
        }
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Check if the word contains `letter` at least once
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.word.contains(letter.as_char())
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.word)
    }
}
