//! Sweep execution and reporting.

use std::fmt;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::info;

use super::config::SweepConfig;
use super::stats::RunningMean;
use crate::anneal::{AnnealConfig, Annealer};
use crate::error::ConfigError;

/// Aggregated outcome of one `(temperature, decay)` cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStats {
    pub initial_temperature: f64,
    pub decay: f64,

    /// Trials that ended on a zero-cost board.
    pub solved: usize,

    /// Final cost over all trials.
    pub cost: RunningMean,

    /// Wall time per trial in milliseconds.
    pub millis: RunningMean,

    /// Annealing steps per trial.
    pub steps: RunningMean,
}

impl CellStats {
    fn new(config: &AnnealConfig) -> Self {
        Self {
            initial_temperature: config.initial_temperature,
            decay: config.decay,
            solved: 0,
            cost: RunningMean::default(),
            millis: RunningMean::default(),
            steps: RunningMean::default(),
        }
    }

    pub fn trials(&self) -> usize {
        self.cost.count()
    }

    /// Fraction of trials solved, in `[0, 1]`.
    pub fn solve_rate(&self) -> f64 {
        if self.trials() == 0 {
            0.0
        } else {
            self.solved as f64 / self.trials() as f64
        }
    }
}

/// Result of a sweep: one entry per cell, temperature-major.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepReport {
    pub cells: Vec<CellStats>,
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<8}{:<10}{:<12}{:<16}{}",
            "T", "deltaT", "Avg. Cost", "Avg. Time (ms)", "Solved"
        )?;
        for cell in &self.cells {
            writeln!(
                f,
                "{:<8.0}{:<10.3}{:<12.2}{:<16.3}{:.0}%",
                cell.initial_temperature,
                cell.decay,
                cell.cost.mean(),
                cell.millis.mean(),
                cell.solve_rate() * 100.0
            )?;
        }
        Ok(())
    }
}

/// Runs a parameter sweep.
pub struct SweepRunner;

impl SweepRunner {
    /// Anneals a fresh random board `trials` times for every cell.
    ///
    /// Each cell seeds its own [`StdRng`] from the base seed and its index,
    /// so the cost and step statistics are the same whether cells run one
    /// after another or in parallel (`parallel` feature).
    pub fn run(config: &SweepConfig) -> Result<SweepReport, ConfigError> {
        config.validate()?;

        let base_seed = config.seed.unwrap_or_else(rand::random);
        let cells = config.cells();

        #[cfg(feature = "parallel")]
        let iter = cells.par_iter().enumerate();
        #[cfg(not(feature = "parallel"))]
        let iter = cells.iter().enumerate();

        let cells = iter
            .map(|(index, cell)| run_cell(cell, config.trials, cell_seed(base_seed, index)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SweepReport { cells })
    }
}

fn run_cell(config: &AnnealConfig, trials: usize, seed: u64) -> Result<CellStats, ConfigError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stats = CellStats::new(config);

    for _ in 0..trials {
        let start = Instant::now();
        let result = Annealer::solve(config, &mut rng)?;
        let elapsed = start.elapsed();

        stats.cost.push(f64::from(result.cost));
        stats.millis.push(elapsed.as_secs_f64() * 1e3);
        stats.steps.push(result.steps as f64);
        if result.solved() {
            stats.solved += 1;
        }
    }

    info!(
        initial_temperature = config.initial_temperature,
        decay = config.decay,
        avg_cost = stats.cost.mean(),
        solved = stats.solved,
        trials,
        "cell finished"
    );

    Ok(stats)
}

/// Mixes the base seed with the cell index (SplitMix64 finalizer) so nearby
/// indices get unrelated streams.
fn cell_seed(base: u64, index: usize) -> u64 {
    let mut z = base.wrapping_add((index as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
