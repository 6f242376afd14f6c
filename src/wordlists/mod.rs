//! Word store
//!
//! The read-only list of valid words every game draws from, loaded once from
//! a file or from the list embedded at build time.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{Word, WordError};
use rand::Rng;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid word {text:?} on line {line}")]
    InvalidWord {
        line: usize,
        text: String,
        #[source]
        source: WordError,
    },
    #[error("word list is empty")]
    Empty,
}

/// Ordered, non-empty, read-only list of words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Wrap a list of words
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// The list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: loader::words_from_slice(WORDS),
        }
    }

    /// Load a newline-delimited word list file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable, contains a malformed line,
    /// or holds no words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        Self::new(loader::load_from_file(path)?)
    }

    /// Build from string slices, skipping invalid entries
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if no valid word remains.
    pub fn from_slice(slice: &[&str]) -> Result<Self, WordListError> {
        Self::new(loader::words_from_slice(slice))
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Find a word by its text (case-insensitive)
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let text = text.to_lowercase();
        self.words.iter().find(|w| w.text() == text)
    }

    /// Pick a word uniformly at random
    ///
    /// Never fails: every constructor rejects an empty list.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
        assert_eq!(WordList::embedded().len(), WORDS_COUNT);
    }

    #[test]
    fn empty_list_rejected() {
        assert!(matches!(WordList::new(Vec::new()), Err(WordListError::Empty)));
        assert!(matches!(
            WordList::from_slice(&["toolong"]),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn find_is_case_insensitive() {
        let list = WordList::from_slice(&["crane", "slate"]).unwrap();
        assert_eq!(list.find("SLATE").map(Word::text), Some("slate"));
        assert!(list.find("speed").is_none());
    }

    #[test]
    fn choose_is_reproducible_with_seed() {
        let list = WordList::embedded();
        let a = list.choose(&mut StdRng::seed_from_u64(7));
        let b = list.choose(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn choose_from_single_word_list() {
        let list = WordList::from_slice(&["speed"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            assert_eq!(list.choose(&mut rng).text(), "speed");
        }
    }
}
