//! Wordle feedback coloring
//!
//! A coloring is the feedback for a guess, one mark per position:
//! - Green: letter in the correct position
//! - Yellow: letter in the hidden word, but elsewhere
//! - Black: letter absent, or all its instances already accounted for
//!
//! Text form is one of `g`/`y`/`b` per position, e.g. `"yygyy"`.

use super::Word;
use super::word::WORD_LENGTH;
use std::fmt;

/// Feedback mark for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Green,
    Yellow,
    Black,
}

impl Mark {
    /// Single-letter text form
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Black => 'b',
        }
    }

    /// Emoji square form
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Black => '⬛',
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'B' | 'b' | '-' | '_' | '⬛' | '⬜' => Some(Self::Black),
            _ => None,
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coloring([Mark; WORD_LENGTH]);

impl Coloring {
    /// All greens (the guess was the hidden word)
    pub const ALL_GREEN: Self = Self([Mark::Green; WORD_LENGTH]);

    /// Build a coloring from explicit marks
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Calculate the coloring of `guess` against `hidden`
    ///
    /// # Algorithm
    /// 1. First pass: exact position matches become green and consume that
    ///    letter instance of the hidden word; letters that do not occur in
    ///    the hidden word at all become black.
    /// 2. Second pass: every remaining position searches the unconsumed
    ///    letters of the hidden word; a hit is yellow and consumes the
    ///    instance, a miss is black.
    ///
    /// A letter occurring k times in the hidden word gets at most k
    /// non-black marks, and greens always claim their instance first.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Coloring, Word};
    ///
    /// let hidden = Word::new("abcde").unwrap();
    /// let guess = Word::new("edcba").unwrap();
    ///
    /// assert_eq!(Coloring::calculate(&hidden, &guess).to_string(), "yygyy");
    /// ```
    #[must_use]
    pub fn calculate(hidden: &Word, guess: &Word) -> Self {
        let mut marks: [Option<Mark>; WORD_LENGTH] = [None; WORD_LENGTH];
        // `None` marks a consumed letter instance
        let mut remaining: [Option<u8>; WORD_LENGTH] = (*hidden.chars()).map(Some);

        for (i, &letter) in guess.chars().iter().enumerate() {
            if letter == hidden.char_at(i) {
                marks[i] = Some(Mark::Green);
                remaining[i] = None;
            } else if !hidden.has_letter(letter) {
                marks[i] = Some(Mark::Black);
            }
        }

        for (i, &letter) in guess.chars().iter().enumerate() {
            if marks[i].is_some() {
                continue;
            }
            let found = remaining.iter().position(|&slot| slot == Some(letter));
            marks[i] = Some(match found {
                Some(position) => {
                    remaining[position] = None;
                    Mark::Yellow
                }
                None => Mark::Black,
            });
        }

        Self(marks.map(|mark| mark.unwrap_or(Mark::Black)))
    }

    /// Check if every position is green
    #[inline]
    #[must_use]
    pub fn is_all_green(self) -> bool {
        self == Self::ALL_GREEN
    }

    /// All marks in position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Mark at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Count how many positions carry the given mark
    #[must_use]
    pub fn count(self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert to an emoji string like "🟨🟨🟩🟨🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}

impl fmt::Display for Coloring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Coloring {
    type Err = String;

    /// Parse "gybbg", "GY--G" or "🟩🟨⬛⬛🟩"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: Option<Vec<Mark>> = s.chars().map(Mark::from_symbol).collect();

        parsed
            .and_then(|marks| <[Mark; WORD_LENGTH]>::try_from(marks).ok())
            .map(Self)
            .ok_or_else(|| format!("Invalid coloring string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn color(hidden: &str, guess: &str) -> Coloring {
        Coloring::calculate(&Word::new(hidden).unwrap(), &Word::new(guess).unwrap())
    }

    #[rstest]
    #[case("abcde", "edcba", "yygyy")]
    #[case("speed", "erase", "ybbyy")]
    #[case("floor", "robot", "yybgb")]
    #[case("crane", "eerie", "bbybg")]
    #[case("slate", "crane", "bbgbg")]
    #[case("abcde", "fghij", "bbbbb")]
    #[case("aabbb", "bbaaa", "yyyyb")]
    #[case("llama", "hello", "bbyyb")]
    fn calculate_matches_reference(
        #[case] hidden: &str,
        #[case] guess: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(color(hidden, guess).to_string(), expected);
    }

    #[test]
    fn guessing_hidden_word_is_all_green() {
        for word in ["crane", "speed", "aaaaa", "zzzzz"] {
            let coloring = color(word, word);
            assert!(coloring.is_all_green());
            assert_eq!(coloring, Coloring::ALL_GREEN);
        }
    }

    #[test]
    fn calculate_is_deterministic() {
        assert_eq!(color("speed", "erase"), color("speed", "erase"));
    }

    #[test]
    fn duplicate_letters_never_exceed_hidden_count() {
        let hidden = Word::new("speed").unwrap();
        for guess in ["erase", "eeeee", "geese", "emcee", "steep"] {
            let guess = Word::new(guess).unwrap();
            let coloring = Coloring::calculate(&hidden, &guess);
            let non_black_e = guess
                .chars()
                .iter()
                .zip(coloring.marks())
                .filter(|&(&ch, &mark)| ch == b'e' && mark != Mark::Black)
                .count();
            assert!(non_black_e <= hidden.count_of(b'e'), "{guess}: {coloring}");
        }
    }

    #[test]
    fn green_claims_instance_before_yellow() {
        // Only one E in the hidden word; the green at position 4 claims it
        assert_eq!(color("crane", "eerie").count(Mark::Yellow), 1);
        assert_eq!(color("crane", "eerie").mark_at(4), Mark::Green);
        assert_eq!(color("crane", "eerie").mark_at(0), Mark::Black);
    }

    #[test]
    fn parse_text_forms() {
        let c1: Coloring = "gybbg".parse().unwrap();
        let c2: Coloring = "GY--G".parse().unwrap();
        let c3: Coloring = "🟩🟨⬛⬛🟩".parse().unwrap();

        assert_eq!(c1, c2);
        assert_eq!(c1, c3);
        assert_eq!(c1.to_string(), "gybbg");
    }

    #[test]
    fn parse_rejects_invalid() {
        assert!("gybb".parse::<Coloring>().is_err());
        assert!("gybbgg".parse::<Coloring>().is_err());
        assert!("gxbbg".parse::<Coloring>().is_err());
        assert!("".parse::<Coloring>().is_err());
    }

    #[test]
    fn emoji_form() {
        assert_eq!(color("abcde", "edcba").to_emoji(), "🟨🟨🟩🟨🟨");
        assert_eq!(Coloring::ALL_GREEN.to_emoji(), "🟩🟩🟩🟩🟩");
    }
}
