//! Game simulation and aggregation
//!
//! Plays single games, tallies their outcomes and merges their guess
//! sequences, with JSON persistence for the aggregates.

mod persist;
pub mod session;
pub mod stats;
pub mod tree;

pub use persist::StoreError;
pub use session::{
    GameOutcome, GameRecord, MAX_TURNS, SessionError, Turn, play_game, play_random_game,
};
pub use stats::Stats;
pub use tree::GameTree;
