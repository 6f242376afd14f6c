//! Interactive terminal chart of aggregated statistics

pub mod app;
mod rendering;

pub use app::{ChartApp, LabelMode, run_chart};
