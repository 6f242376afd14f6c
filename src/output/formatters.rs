//! Formatting utilities for terminal output

use crate::core::{Coloring, Mark, Word};
use colored::Colorize;

/// Render a guess as colored letter tiles
#[must_use]
pub fn colored_guess(guess: &Word, coloring: Coloring) -> String {
    guess
        .chars()
        .iter()
        .zip(coloring.marks())
        .map(|(&letter, &mark)| {
            let tile = format!(" {} ", char::from(letter).to_ascii_uppercase());
            match mark {
                Mark::Green => tile.black().on_green().bold().to_string(),
                Mark::Yellow => tile.black().on_yellow().bold().to_string(),
                Mark::Black => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage of `count` in `total`, 0 when `total` is 0
#[must_use]
pub fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
