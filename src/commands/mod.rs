//! Command implementations

pub mod color;
pub mod play;
pub mod simulate;
pub mod tree;

pub use color::{ColorResult, color_guess};
pub use play::{PlayConfig, play_one};
pub use simulate::{SimulationConfig, SimulationResult, run_simulation, save_run};
pub use tree::{TreeSummary, summarize_tree};
