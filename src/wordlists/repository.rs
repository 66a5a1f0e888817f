//! Category to word-list store with uniform random draws

use crate::core::Challenge;
use crate::error::DataLoadError;
use rand::Rng;
use rustc_hash::FxHashMap;

/// Read-only mapping from category to its words
///
/// Invariants: at least one category, and every category has at least one word.
/// Categories and words are stored uppercase.
#[derive(Debug, Clone)]
pub struct WordRepository {
    words: FxHashMap<String, Vec<String>>,
    // Indexable list of categories for uniform selection
    categories: Vec<String>,
}

impl WordRepository {
    /// Parse `CATEGORY,word1,word2,...` records from text
    ///
    /// # Errors
    /// Returns `DataLoadError` for malformed records or when no categories are found.
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::WordRepository;
    ///
    /// let repository = WordRepository::parse("animals,cat,dog\nfruits,kiwi").unwrap();
    /// assert_eq!(repository.category_count(), 2);
    /// assert_eq!(repository.word_count(), 3);
    /// ```
    pub fn parse(source: &str) -> Result<Self, DataLoadError> {
        super::loader::parse_records(source.lines())
    }

    /// Starting point for the loader; never handed out before a category is inserted
    pub(crate) fn empty() -> Self {
        Self {
            words: FxHashMap::default(),
            categories: Vec::new(),
        }
    }

    /// Store `words` under `category`, replacing any previous entry
    ///
    /// Returns `true` if the category was already present.
    pub(crate) fn insert(&mut self, category: String, words: Vec<String>) -> bool {
        debug_assert!(!words.is_empty());
        let replaced = self.words.insert(category.clone(), words).is_some();
        if !replaced {
            self.categories.push(category);
        }
        replaced
    }

    /// Pick a category uniformly, then a word from it uniformly
    pub fn draw_challenge<R: Rng + ?Sized>(&self, rng: &mut R) -> Challenge {
        let category = &self.categories[rng.random_range(0..self.categories.len())];
        let words = &self.words[category];
        let word = &words[rng.random_range(0..words.len())];
        Challenge::from_loaded(category, word)
    }

    /// Categories in load order
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Words stored for `category` (exact uppercase match)
    #[must_use]
    pub fn words(&self, category: &str) -> Option<&[String]> {
        self.words.get(category).map(Vec::as_slice)
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    const DATA: &str = "animals,cat,dog,horse\nfruits,kiwi,apple\ncountries,new zealand\nplanets,mars,venus";

    #[test]
    fn draws_only_loaded_pairs() {
        let repository = WordRepository::parse(DATA).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let challenge = repository.draw_challenge(&mut rng);
            let words = repository
                .words(challenge.category())
                .expect("drawn category must exist");
            assert!(words.iter().any(|w| w == challenge.word()));
        }
    }

    #[test]
    fn every_category_and_word_is_reachable() {
        let repository = WordRepository::parse(DATA).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let mut categories = HashSet::new();
        let mut words = HashSet::new();
        for _ in 0..2000 {
            let challenge = repository.draw_challenge(&mut rng);
            categories.insert(challenge.category().to_string());
            words.insert(challenge.word().to_string());
        }

        assert_eq!(categories.len(), repository.category_count());
        assert_eq!(words.len(), repository.word_count());
    }

    #[test]
    fn same_seed_same_draws() {
        let repository = WordRepository::parse(DATA).unwrap();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);

        for _ in 0..20 {
            assert_eq!(
                repository.draw_challenge(&mut a),
                repository.draw_challenge(&mut b)
            );
        }
    }

    #[test]
    fn draw_is_uppercase() {
        let repository = WordRepository::parse("Animals,Cat").unwrap();
        let challenge = repository.draw_challenge(&mut StdRng::seed_from_u64(0));
        assert_eq!(challenge.category(), "ANIMALS");
        assert_eq!(challenge.word(), "CAT");
    }

    #[test]
    fn sources_without_records_never_build_a_repository() {
        for source in ["", "\n\n", "   \n"] {
            assert!(matches!(
                WordRepository::parse(source),
                Err(DataLoadError::Empty)
            ));
        }
    }

    #[test]
    fn single_record_repository_draws() {
        let repository = WordRepository::parse("planets,mars").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10 {
            let challenge = repository.draw_challenge(&mut rng);
            assert_eq!(challenge.category(), "PLANETS");
            assert_eq!(challenge.word(), "MARS");
        }
    }

    #[test]
    fn counts() {
        let repository = WordRepository::parse(DATA).unwrap();
        assert_eq!(repository.category_count(), 4);
        assert_eq!(repository.word_count(), 8);
        assert!(!repository.is_empty());
        assert_eq!(
            repository.categories(),
            &["ANIMALS", "FRUITS", "COUNTRIES", "PLANETS"]
        );
    }
}
