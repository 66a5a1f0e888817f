//! Word data loading
//!
//! Each non-blank line is a record `CATEGORY,word1,word2,...`. Fields are trimmed and
//! empty word fields are ignored. Commas cannot be escaped.
//!
//! Loading is all-or-nothing: the first malformed record aborts with a `DataLoadError`.
//! A repeated category replaces the earlier record.

use super::WORD_RECORDS;
use super::repository::WordRepository;
use crate::core::is_guessable_word;
use crate::error::DataLoadError;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load word data from a file
///
/// # Errors
///
/// Returns `DataLoadError::Io` if the file cannot be read, or a parse error if any
/// record is malformed.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let repository = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} categories", repository.category_count());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordRepository, DataLoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let repository = parse_records(content.lines())?;
    info!(
        path = %path.display(),
        categories = repository.category_count(),
        words = repository.word_count(),
        "loaded word data"
    );
    Ok(repository)
}

/// Build the repository from the records compiled into the binary
///
/// # Errors
///
/// Only fails if `data/words.txt` was malformed at build time.
pub fn embedded() -> Result<WordRepository, DataLoadError> {
    parse_records(WORD_RECORDS.iter().copied())
}

/// Parse records, one per item
///
/// # Errors
///
/// See the module docs for the rejected inputs.
pub fn parse_records<'a, I>(lines: I) -> Result<WordRepository, DataLoadError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut repository = WordRepository::empty();

    for (index, line) in lines.into_iter().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let (category, words) = parse_record(line, line_no)?;
        if repository.insert(category.clone(), words) {
            warn!(line = line_no, %category, "duplicate category replaces earlier record");
        }
    }

    if repository.is_empty() {
        return Err(DataLoadError::Empty);
    }
    Ok(repository)
}

fn parse_record(line: &str, line_no: usize) -> Result<(String, Vec<String>), DataLoadError> {
    let mut fields = line.split(',').map(str::trim);

    let category = fields.next().unwrap_or_default().to_uppercase();
    if category.is_empty() {
        return Err(DataLoadError::EmptyCategory { line: line_no });
    }

    let mut words = Vec::new();
    for field in fields.filter(|f| !f.is_empty()) {
        if !is_guessable_word(field) {
            return Err(DataLoadError::InvalidWord {
                line: line_no,
                category,
                word: field.to_string(),
            });
        }
        words.push(field.to_uppercase());
    }

    if words.is_empty() {
        return Err(DataLoadError::MissingWords {
            line: line_no,
            category,
        });
    }

    Ok((category, words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_trims_and_uppercases() {
        let repository = parse_records(["  fruits , kiwi ,  sweet potato,\r"]).unwrap();
        assert_eq!(repository.categories(), &["FRUITS"]);
        assert_eq!(
            repository.words("FRUITS").unwrap(),
            &["KIWI", "SWEET POTATO"]
        );
    }

    #[test]
    fn parse_skips_blank_lines() {
        let repository = parse_records(["", "animals,cat", "   ", "fruits,kiwi"]).unwrap();
        assert_eq!(repository.category_count(), 2);
    }

    #[test]
    fn category_without_words_aborts() {
        let err = parse_records(["animals,cat", "fruits"]).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::MissingWords { line: 2, ref category } if category == "FRUITS"
        ));

        let err = parse_records(["fruits,,  ,"]).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingWords { line: 1, .. }));
    }

    #[test]
    fn empty_category_aborts() {
        let err = parse_records([",cat,dog"]).unwrap_err();
        assert!(matches!(err, DataLoadError::EmptyCategory { line: 1 }));
    }

    #[test]
    fn unguessable_word_aborts() {
        let err = parse_records(["numbers,one,2"]).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::InvalidWord { line: 1, ref word, .. } if word == "2"
        ));
    }

    #[test]
    fn no_records_is_an_error() {
        assert!(matches!(
            parse_records(std::iter::empty()),
            Err(DataLoadError::Empty)
        ));
        assert!(matches!(
            parse_records(["", "  "]),
            Err(DataLoadError::Empty)
        ));
    }

    #[test]
    fn duplicate_category_last_write_wins() {
        let repository =
            parse_records(["animals,cat,dog", "fruits,kiwi", "Animals,horse"]).unwrap();

        assert_eq!(repository.categories(), &["ANIMALS", "FRUITS"]);
        assert_eq!(repository.words("ANIMALS").unwrap(), &["HORSE"]);
        assert_eq!(repository.word_count(), 2);
    }

    #[test]
    fn load_from_file_reads_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "animals,cat,dog").unwrap();
        writeln!(file, "planets,mars").unwrap();

        let repository = load_from_file(file.path()).unwrap();
        assert_eq!(repository.category_count(), 2);
        assert_eq!(repository.words("PLANETS").unwrap(), &["MARS"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn embedded_data_loads() {
        let repository = embedded().unwrap();
        assert!(repository.category_count() > 0);
        assert!(repository.word_count() >= repository.category_count());
    }
}
