//! Wordle Simulator
//!
//! Plays Wordle with a naive strategy: every guess is drawn at random from the
//! words still consistent with the feedback so far. Many games are simulated
//! to collect win/loss statistics, and the guess sequences can be merged into
//! a prefix tree.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sim::core::{Coloring, Word};
//!
//! let hidden = Word::new("abcde").unwrap();
//! let guess = Word::new("edcba").unwrap();
//!
//! let coloring = Coloring::calculate(&hidden, &guess);
//! assert_eq!(coloring.to_string(), "yygyy");
//! ```

// Core domain types
pub mod core;

// Game sessions, statistics and trees
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI chart
pub mod interactive;
