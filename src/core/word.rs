//! Validated five-letter words
//!
//! Words are stored lowercase with their letters as bytes, plus the set of
//! distinct letters so presence checks during filtering are a single mask test.

use super::constraints::LetterSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Why a string is not a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("expected 5 letters, got {0}")]
    Length(usize),
    #[error("{0:?} is not a letter a-z")]
    NotALetter(char),
}

/// A lowercase five-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
    present: LetterSet,
}

impl Word {
    /// Parse a word, folding ASCII upper case to lower case
    ///
    /// # Errors
    /// `WordError::Length` unless there are exactly five characters,
    /// `WordError::NotALetter` for the first character outside `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Word, WordError};
    ///
    /// assert_eq!(Word::new("Speed").unwrap().text(), "speed");
    /// assert_eq!(Word::new("sped"), Err(WordError::Length(4)));
    /// assert_eq!(Word::new("sh0rt"), Err(WordError::NotALetter('0')));
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().to_ascii_lowercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::Length(len));
        }
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::NotALetter(bad));
        }

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::Length(text.len()))?;

        let mut present = LetterSet::EMPTY;
        for &letter in &letters {
            present.insert(letter);
        }

        Ok(Self {
            text,
            letters,
            present,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters as ASCII bytes, in position order
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Letter at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> LetterSet {
        self.present
    }

    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.present.contains(letter)
    }

    /// How many times `letter` occurs
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("crane", "crane")]
    #[case("CRANE", "crane")]
    #[case("SpEeD", "speed")]
    fn parses_and_lowercases(#[case] input: &str, #[case] expected: &str) {
        let word: Word = input.parse().unwrap();
        assert_eq!(word.text(), expected);
        assert_eq!(word.chars(), expected.as_bytes());
        assert_eq!(word.to_string(), expected);
    }

    #[rstest]
    #[case("", WordError::Length(0))]
    #[case("sped", WordError::Length(4))]
    #[case("cranes", WordError::Length(6))]
    #[case("too long", WordError::Length(8))]
    #[case("cran3", WordError::NotALetter('3'))]
    #[case("cr ne", WordError::NotALetter(' '))]
    #[case("crané", WordError::NotALetter('é'))]
    fn rejects(#[case] input: &str, #[case] expected: WordError) {
        assert_eq!(Word::new(input), Err(expected));
    }

    #[test]
    fn letters_and_counts() {
        let word = Word::new("geese").unwrap();
        assert_eq!(word.char_at(0), b'g');
        assert_eq!(word.char_at(4), b'e');
        assert_eq!(word.count_of(b'e'), 3);
        assert_eq!(word.count_of(b'z'), 0);
        assert!(word.has_letter(b's'));
        assert!(!word.has_letter(b'a'));
        assert_eq!(word.letter_set().len(), 3);
    }

    #[test]
    fn case_does_not_affect_equality() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }

    #[test]
    fn error_messages() {
        assert_eq!(WordError::Length(4).to_string(), "expected 5 letters, got 4");
        assert_eq!(
            WordError::NotALetter('3').to_string(),
            "'3' is not a letter a-z"
        );
    }
}
