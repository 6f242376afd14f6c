//! Single game command
//!
//! Plays one game and keeps every step for display.

use crate::core::Word;
use crate::game::{GameRecord, play_game, play_random_game};
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for playing one game
pub struct PlayConfig {
    /// Hidden word to use instead of a random draw
    pub hidden: Option<String>,
    pub seed: u64,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { hidden: None, seed }
    }
}

/// Play a single game
///
/// # Errors
///
/// Returns an error if:
/// - The hidden word is not a valid 5-letter word
/// - No candidates remain, which happens when the hidden word is outside the list
pub fn play_one(words: &WordList, config: &PlayConfig) -> Result<GameRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let record = match &config.hidden {
        Some(text) => {
            let hidden =
                Word::new(text.as_str()).with_context(|| format!("invalid hidden word {text:?}"))?;
            if words.find(hidden.text()).is_none() {
                warn!("hidden word {hidden} is not in the word list");
            }
            play_game(words, &hidden, &mut rng)?
        }
        None => play_random_game(words, &mut rng)?,
    };

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameOutcome, MAX_TURNS};

    #[test]
    fn play_with_fixed_hidden_word() {
        let words = WordList::embedded();
        let config = PlayConfig {
            hidden: Some("SPEED".to_string()),
            ..PlayConfig::new(4)
        };

        let record = play_one(&words, &config).unwrap();
        assert_eq!(record.hidden.text(), "speed");
        assert!(record.turns.len() <= MAX_TURNS);
        if let GameOutcome::Won { turn } = record.outcome {
            assert_eq!(record.turns[turn - 1].guess.text(), "speed");
        }
    }

    #[test]
    fn play_is_reproducible() {
        let words = WordList::embedded();
        let a = play_one(&words, &PlayConfig::new(123)).unwrap();
        let b = play_one(&words, &PlayConfig::new(123)).unwrap();
        assert!(a.guesses().eq(b.guesses()));
    }

    #[test]
    fn invalid_hidden_word_is_error() {
        let words = WordList::embedded();
        let config = PlayConfig {
            hidden: Some("sp33d".to_string()),
            ..PlayConfig::new(0)
        };
        assert!(play_one(&words, &config).is_err());
    }

    #[test]
    fn hidden_word_outside_list_is_error() {
        let words = WordList::from_slice(&["aaaaa", "bbbbb"]).unwrap();
        let config = PlayConfig {
            hidden: Some("zzzzz".to_string()),
            ..PlayConfig::new(0)
        };
        assert!(play_one(&words, &config).is_err());
    }
}
