//! Parameter sweeps over the annealer.
//!
//! Runs every `(initial temperature, decay)` pair of a grid many times from
//! fresh random boards and reports mean final cost, mean wall time and the
//! share of runs that found a solution.

mod config;
mod runner;
mod stats;

pub use config::SweepConfig;
pub use runner::{CellStats, SweepReport, SweepRunner};
pub use stats::RunningMean;
