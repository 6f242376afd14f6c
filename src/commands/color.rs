//! Coloring command
//!
//! Computes the feedback for one guess against a hidden word.

use crate::core::{Coloring, Word};
use anyhow::{Context, Result};

/// Result of coloring a guess
pub struct ColorResult {
    pub hidden: Word,
    pub guess: Word,
    pub coloring: Coloring,
}

/// Color `guess` against `hidden`
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
pub fn color_guess(hidden: &str, guess: &str) -> Result<ColorResult> {
    let hidden = Word::new(hidden).with_context(|| format!("invalid hidden word {hidden:?}"))?;
    let guess = Word::new(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    let coloring = Coloring::calculate(&hidden, &guess);

    Ok(ColorResult {
        hidden,
        guess,
        coloring,
    })
}
