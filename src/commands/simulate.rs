//! Simulate command
//!
//! Plays many independent games in parallel and aggregates their outcomes.

use crate::game::{GameRecord, GameTree, SessionError, Stats, StoreError, play_random_game};
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::path::Path;
use std::time::{Duration, Instant};

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {per_sec} | eta {eta}";

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    /// Game `i` is played with a generator seeded from `seed + i`
    pub seed: u64,
    pub record_tree: bool,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            record_tree: false,
            show_progress: false,
        }
    }
}

/// Result of a simulation run
pub struct SimulationResult {
    pub games: usize,
    pub seed: u64,
    pub stats: Stats,
    /// Present when the run recorded guess sequences
    pub tree: Option<GameTree>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Partial aggregate of a slice of games
#[derive(Default)]
struct Tally {
    stats: Stats,
    tree: GameTree,
}

impl Tally {
    fn add(&mut self, record: &GameRecord, record_tree: bool) {
        self.stats.record(record.outcome);
        if record_tree {
            self.tree.insert_path(record.guesses());
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.stats.merge(&other.stats);
        self.tree.absorb(other.tree);
        self
    }
}

/// Play `config.games` games drawn from `words`
///
/// Games are independent and seeded individually, so a given seed yields the
/// same statistics and tree no matter how the thread pool schedules them.
///
/// # Errors
///
/// Returns the first `SessionError` raised by any game.
pub fn run_simulation(
    words: &WordList,
    config: &SimulationConfig,
) -> Result<SimulationResult, SessionError> {
    let start = Instant::now();

    let progress = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_TEMPLATE) {
        progress.set_style(style.progress_chars("█▓▒░"));
    }

    let record_tree = config.record_tree;
    let tally = (0..config.games as u64)
        .into_par_iter()
        .map(|index| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index));
            let record = play_random_game(words, &mut rng);
            progress.inc(1);
            record
        })
        .try_fold(Tally::default, |mut tally, record| {
            tally.add(&record?, record_tree);
            Ok::<_, SessionError>(tally)
        })
        .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))?;

    progress.finish_and_clear();

    let duration = start.elapsed();
    info!(
        "simulated {} games in {:.3}s (seed {})",
        config.games,
        duration.as_secs_f64(),
        config.seed
    );

    Ok(SimulationResult {
        games: config.games,
        seed: config.seed,
        stats: tally.stats,
        tree: record_tree.then_some(tally.tree),
        duration,
        games_per_second: config.games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Fold a run into the saved aggregates and write them back
///
/// The tree goes first: merging is idempotent, so a tree that already holds
/// the run is harmless if the stats write then fails and the run is repeated.
/// The saved tree is only touched when both it and the run's tree are present.
///
/// # Errors
///
/// Returns the first write error; the stats file is left as it was if the
/// tree cannot be written.
pub fn save_run(
    result: SimulationResult,
    mut stats: Stats,
    tree: Option<GameTree>,
    stats_path: &Path,
    tree_path: &Path,
) -> Result<Stats, StoreError> {
    if let (Some(mut tree), Some(run_tree)) = (tree, result.tree) {
        tree.absorb(run_tree);
        tree.save(tree_path)?;
    }

    stats.merge(&result.stats);
    stats.save(stats_path)?;
    Ok(stats)
}
