//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::WordListError;
use crate::core::Word;
use log::warn;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Blank lines are skipped and surrounding whitespace is trimmed.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any line is not a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_sim::wordlists::loader::load_from_file;
///
/// let words = load_from_file("allowed_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_words(&content)
}

/// Parse newline-delimited words
///
/// # Errors
///
/// Returns `WordListError::InvalidWord` with the 1-based line number of the
/// first malformed entry.
pub fn parse_words(content: &str) -> Result<Vec<Word>, WordListError> {
    let mut words = Vec::new();
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut duplicates = 0;

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| WordListError::InvalidWord {
            line: index + 1,
            text: trimmed.to_string(),
            source,
        })?;

        if !seen.insert(trimmed) {
            duplicates += 1;
        }
        words.push(word);
    }

    if duplicates > 0 {
        warn!("word list contains {duplicates} duplicate entries");
    }

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_sim::wordlists::loader::words_from_slice;
/// use wordle_sim::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
