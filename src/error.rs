//! Error types for loading game data and assets

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Word data could not be loaded. Fatal at startup.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read word data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: empty category name")]
    EmptyCategory { line: usize },

    #[error("line {line}: category '{category}' has no words")]
    MissingWords { line: usize, category: String },

    #[error(
        "line {line}: word '{word}' in category '{category}' may only contain letters and spaces"
    )]
    InvalidWord {
        line: usize,
        category: String,
        word: String,
    },

    #[error("word data contains no categories")]
    Empty,
}

/// A decoration asset could not be loaded. Callers fall back to the embedded default.
#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error("failed to read asset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("expected {expected} gallows frames in {path}, found {found}")]
    FrameCount {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

/// Input that is not a guessable letter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("'{0}' is not a letter from A to Z")]
    NotAlphabetic(char),
}

/// A challenge that could never be won
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChallengeError {
    #[error("empty category name")]
    EmptyCategory,

    #[error("word '{0}' must contain a letter and only letters A to Z and spaces")]
    InvalidWord(String),
}
