//! Sweep configuration.

use crate::anneal::{Acceptance, AnnealConfig, DEFAULT_FLOOR_TEMPERATURE};
use crate::error::ConfigError;

/// Parameter grid for a sweep: every initial temperature is paired with
/// every decay, and each pair is annealed `trials` times.
///
/// # Examples
///
/// ```
/// use queens_anneal::sweep::SweepConfig;
///
/// let config = SweepConfig::default()
///     .with_temperatures(vec![10.0, 100.0])
///     .with_decays(vec![0.99])
///     .with_trials(20)
///     .with_seed(42);
/// assert_eq!(config.cells().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Initial temperatures to try.
    pub temperatures: Vec<f64>,

    /// Cooling multipliers to try.
    pub decays: Vec<f64>,

    /// Runs per `(temperature, decay)` cell.
    pub trials: usize,

    /// Floor temperature shared by every cell.
    pub floor_temperature: f64,

    /// Acceptance rule shared by every cell.
    pub acceptance: Acceptance,

    /// Base seed; each cell derives its own stream from it. `None` = random.
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            temperatures: vec![100.0, 1_000.0, 10_000.0],
            decays: vec![0.9, 0.99, 0.999],
            trials: 100,
            floor_temperature: DEFAULT_FLOOR_TEMPERATURE,
            acceptance: Acceptance::default(),
            seed: None,
        }
    }
}

impl SweepConfig {
    pub fn with_temperatures(mut self, temperatures: Vec<f64>) -> Self {
        self.temperatures = temperatures;
        self
    }

    pub fn with_decays(mut self, decays: Vec<f64>) -> Self {
        self.decays = decays;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_floor_temperature(mut self, t: f64) -> Self {
        self.floor_temperature = t;
        self
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Annealing configs for every cell, temperature-major.
    pub fn cells(&self) -> Vec<AnnealConfig> {
        self.temperatures
            .iter()
            .flat_map(|&t| {
                self.decays.iter().map(move |&decay| {
                    AnnealConfig::new(t, decay)
                        .with_floor_temperature(self.floor_temperature)
                        .with_acceptance(self.acceptance)
                })
            })
            .collect()
    }

    /// Validates the grid and every cell in it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.temperatures.is_empty() {
            return Err(ConfigError::EmptyGrid("temperature"));
        }
        if self.decays.is_empty() {
            return Err(ConfigError::EmptyGrid("decay"));
        }
        if self.trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        self.cells().iter().try_for_each(AnnealConfig::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let config = SweepConfig::default();
        assert_eq!(config.cells().len(), 9);
        assert_eq!(config.trials, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cells_temperature_major() {
        let config = SweepConfig::default()
            .with_temperatures(vec![10.0, 20.0])
            .with_decays(vec![0.5, 0.9, 0.99])
            .with_floor_temperature(0.5);
        let cells = config.cells();
        let pairs: Vec<(f64, f64)> = cells
            .iter()
            .map(|c| (c.initial_temperature, c.decay))
            .collect();
        assert_eq!(
            pairs,
            vec![(10.0, 0.5), (10.0, 0.9), (10.0, 0.99), (20.0, 0.5), (20.0, 0.9), (20.0, 0.99)]
        );
        assert!(cells.iter().all(|c| c.floor_temperature == 0.5));
    }

    #[test]
    fn test_validate_empty_grid() {
        let config = SweepConfig::default().with_decays(vec![]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyGrid("decay")));
    }

    #[test]
    fn test_validate_no_trials() {
        let config = SweepConfig::default().with_trials(0);
        assert_eq!(config.validate(), Err(ConfigError::NoTrials));
    }

    #[test]
    fn test_validate_bad_cell() {
        let config = SweepConfig::default().with_decays(vec![0.9, 1.0]);
        assert_eq!(config.validate(), Err(ConfigError::InvalidDecay(1.0)));
    }
}
