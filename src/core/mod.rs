//! Core domain types for Wordle
//!
//! Words, feedback colorings and the per-game constraint tracker.
//! Everything here is pure and deterministic.

mod coloring;
mod constraints;
mod word;

pub use coloring::{Coloring, Mark};
pub use constraints::{Constraints, LetterSet};
pub use word::{WORD_LENGTH, Word, WordError};
