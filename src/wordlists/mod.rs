//! Word data for Hangman
//!
//! Category records are parsed into a `WordRepository`, either from the embedded
//! default list or from a user-supplied file.

mod embedded;
pub mod loader;
mod repository;

pub use embedded::{WORD_RECORDS, WORD_RECORDS_COUNT};
pub use repository::WordRepository;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_count_matches_const() {
        assert_eq!(WORD_RECORDS.len(), WORD_RECORDS_COUNT);
    }

    #[test]
    fn embedded_records_parse() {
        let repository = loader::embedded().unwrap();
        assert_eq!(repository.category_count(), WORD_RECORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_guessable() {
        let repository = loader::embedded().unwrap();
        for category in repository.categories() {
            for word in repository.words(category).unwrap() {
                assert!(
                    word.chars().all(|c| c == ' ' || c.is_ascii_uppercase()),
                    "Word '{word}' contains unguessable characters"
                );
            }
        }
    }
}
