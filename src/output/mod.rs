//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_color_result, print_play_result, print_simulation_result, print_stats,
    print_tree_summary,
};
