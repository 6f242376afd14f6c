//! Constraint tracking for candidate elimination
//!
//! Keeps, for one game, the letters still allowed at each position and the
//! letters known to occur somewhere in the hidden word.

use super::word::WORD_LENGTH;
use super::{Coloring, Mark, Word};
use std::fmt;

/// A set of lowercase ASCII letters stored as a 26-bit mask
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// All 26 letters `a..=z`
    pub const ALL: Self = Self((1 << 26) - 1);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase());
        1 << (letter - b'a')
    }

    /// Set containing only `letter`
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        Self(Self::bit(letter))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    #[inline]
    pub fn remove(&mut self, letter: u8) {
        self.0 &= !Self::bit(letter);
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }

    /// Check that every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.letters().map(char::from).collect();
        write!(f, "{{{letters}}}")
    }
}

/// Everything learned about the hidden word during one game
///
/// # Examples
/// ```
/// use wordle_sim::core::{Coloring, Constraints, Word};
///
/// let hidden = Word::new("speed").unwrap();
/// let guess = Word::new("erase").unwrap();
///
/// let mut constraints = Constraints::new();
/// constraints.apply(&guess, Coloring::calculate(&hidden, &guess));
///
/// assert!(constraints.allows(&hidden));
/// assert!(!constraints.allows(&guess));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    allowed: [LetterSet; WORD_LENGTH],
    required: LetterSet,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new()
    }
}

impl Constraints {
    /// Fresh constraints: every letter allowed everywhere, nothing required
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allowed: [LetterSet::ALL; WORD_LENGTH],
            required: LetterSet::EMPTY,
        }
    }

    /// Letters still allowed at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn allowed_at(&self, position: usize) -> LetterSet {
        self.allowed[position]
    }

    /// Letters known to occur somewhere in the hidden word
    #[inline]
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    /// Narrow the constraints with the feedback for `guess`
    ///
    /// Marks are applied in position order:
    /// - green: only this letter stays allowed at the position; letter required
    /// - yellow: letter removed from the position; letter required
    /// - black, letter already required: letter removed from the position only
    /// - black otherwise: letter removed from every position
    ///
    /// Yellows are handed out left to right, so a black repeat of a letter
    /// never precedes a yellow of the same letter. A later green re-pins its
    /// own position.
    pub fn apply(&mut self, guess: &Word, coloring: Coloring) {
        for (i, (&letter, &mark)) in guess.chars().iter().zip(coloring.marks()).enumerate() {
            match mark {
                Mark::Green => {
                    self.allowed[i] = LetterSet::single(letter);
                    self.required.insert(letter);
                }
                Mark::Yellow => {
                    self.allowed[i].remove(letter);
                    self.required.insert(letter);
                }
                Mark::Black if self.required.contains(letter) => {
                    self.allowed[i].remove(letter);
                }
                Mark::Black => {
                    for allowed in &mut self.allowed {
                        allowed.remove(letter);
                    }
                }
            }
        }
    }

    /// Check whether `word` is consistent with everything learned so far
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        let positions_ok = word
            .chars()
            .iter()
            .zip(&self.allowed)
            .all(|(&letter, allowed)| allowed.contains(letter));

        positions_ok && self.required.is_subset(word.letter_set())
    }

    /// Keep only the candidates consistent with the constraints
    #[must_use]
    pub fn filter<'a>(&self, candidates: &[&'a Word]) -> Vec<&'a Word> {
        candidates
            .iter()
            .copied()
            .filter(|word| self.allows(word))
            .collect()
    }
}
