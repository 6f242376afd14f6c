//! Single simulated game
//!
//! Guesses uniformly at random among the words still consistent with the
//! feedback so far, for at most six turns.

use crate::core::{Coloring, Constraints, Word};
use crate::wordlists::WordList;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

/// Maximum number of guesses in one game
pub const MAX_TURNS: usize = 6;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// All green on this 1-based turn
    Won { turn: usize },
    /// Six guesses without an all-green coloring
    Lost,
}

/// Errors that end a game early
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no candidates remain on turn {turn} (hidden word {hidden})")]
    NoCandidates { turn: usize, hidden: String },
}

/// One guess and its feedback
#[derive(Debug, Clone)]
pub struct Turn {
    pub guess: Word,
    pub coloring: Coloring,
    /// Size of the candidate set the guess was drawn from
    pub candidates: usize,
}

/// Everything that happened in one game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub hidden: Word,
    pub turns: Vec<Turn>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// Guessed words in order
    pub fn guesses(&self) -> impl Iterator<Item = &str> {
        self.turns.iter().map(|turn| turn.guess.text())
    }

    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.outcome, GameOutcome::Won { .. })
    }
}

/// Play one game against `hidden`
///
/// Candidate set and constraints live only for the duration of this call.
///
/// # Errors
///
/// Returns `SessionError::NoCandidates` if no word in the list is consistent
/// with the feedback, which can only happen when `hidden` is not in `words`.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_sim::game::{GameOutcome, play_game};
/// use wordle_sim::wordlists::WordList;
///
/// let words = WordList::from_slice(&["crane"]).unwrap();
/// let hidden = words.words()[0].clone();
///
/// let record = play_game(&words, &hidden, &mut StdRng::seed_from_u64(1)).unwrap();
/// assert_eq!(record.outcome, GameOutcome::Won { turn: 1 });
/// ```
pub fn play_game<R: Rng + ?Sized>(
    words: &WordList,
    hidden: &Word,
    rng: &mut R,
) -> Result<GameRecord, SessionError> {
    let mut candidates: Vec<&Word> = words.words().iter().collect();
    let mut constraints = Constraints::new();
    let mut turns = Vec::with_capacity(MAX_TURNS);
    let mut outcome = GameOutcome::Lost;

    for turn in 1..=MAX_TURNS {
        let guess = *candidates
            .choose(rng)
            .ok_or_else(|| SessionError::NoCandidates {
                turn,
                hidden: hidden.text().to_string(),
            })?;

        let coloring = Coloring::calculate(hidden, guess);
        turns.push(Turn {
            guess: guess.clone(),
            coloring,
            candidates: candidates.len(),
        });

        if coloring.is_all_green() {
            outcome = GameOutcome::Won { turn };
            break;
        }

        constraints.apply(guess, coloring);
        candidates = constraints.filter(&candidates);
    }

    debug!(
        "game over: hidden={hidden} outcome={outcome:?} guesses={}",
        turns.len()
    );

    Ok(GameRecord {
        hidden: hidden.clone(),
        turns,
        outcome,
    })
}

/// Draw a hidden word from `words` and play one game
///
/// # Errors
///
/// Propagates `play_game` errors.
pub fn play_random_game<R: Rng + ?Sized>(
    words: &WordList,
    rng: &mut R,
) -> Result<GameRecord, SessionError> {
    let hidden = words.choose(rng);
    play_game(words, hidden, rng)
}
