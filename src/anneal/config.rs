//! Annealing configuration and acceptance rules.

use crate::error::ConfigError;

/// Default stopping temperature.
pub const DEFAULT_FLOOR_TEMPERATURE: f64 = 2.0;

/// Rule deciding whether a neighbor that is not strictly better replaces
/// the current board.
///
/// Strictly better neighbors are accepted under every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acceptance {
    /// Metropolis criterion: accept with probability `exp(delta / T)`,
    /// where `delta = cost(current) - cost(neighbor) <= 0`.
    #[default]
    Metropolis,

    /// Metropolis probability truncated to an integer before the draw.
    ///
    /// `exp(delta / T)` is `1` for equal-cost neighbors and below `1` for
    /// worse ones, so this accepts sideways moves and never climbs. The
    /// temperature only sets the step budget.
    NonWorsening,
}

/// Configuration for an annealing run.
///
/// Temperature starts at `initial_temperature`, is multiplied by `decay`
/// after every step, and the run stops once it is no longer above
/// `floor_temperature` (or as soon as the board reaches zero cost).
///
/// # Examples
///
/// ```
/// use queens_anneal::anneal::{Acceptance, AnnealConfig};
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(1000.0)
///     .with_decay(0.99)
///     .with_floor_temperature(0.05)
///     .with_acceptance(Acceptance::Metropolis);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature `T0`. Higher values accept more uphill moves.
    pub initial_temperature: f64,

    /// Per-step cooling multiplier in (0, 1). Closer to 1 = longer run.
    pub decay: f64,

    /// The run stops when the temperature drops to or below this value.
    pub floor_temperature: f64,

    /// How non-improving neighbors are treated.
    pub acceptance: Acceptance,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            decay: 0.999,
            floor_temperature: DEFAULT_FLOOR_TEMPERATURE,
            acceptance: Acceptance::default(),
        }
    }
}

impl AnnealConfig {
    /// Config with the given `T0` and decay and default floor and acceptance.
    pub fn new(initial_temperature: f64, decay: f64) -> Self {
        Self {
            initial_temperature,
            decay,
            ..Self::default()
        }
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
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

    /// Validates the configuration.
    ///
    /// A `T0` at or below the floor is valid; such a run takes no steps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(ConfigError::InvalidTemperature(self.initial_temperature));
        }
        if !(self.floor_temperature.is_finite() && self.floor_temperature > 0.0) {
            return Err(ConfigError::InvalidFloor(self.floor_temperature));
        }
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(ConfigError::InvalidDecay(self.decay));
        }
        Ok(())
    }

    /// Number of cooling steps before the temperature reaches the floor.
    ///
    /// This is `ceil(ln(floor / T0) / ln(decay))`, computed by replaying the
    /// same floating-point recurrence the annealer uses so the two never
    /// disagree at exact powers of `decay`. A run takes exactly this many
    /// steps unless it reaches zero cost first.
    pub fn step_budget(&self) -> usize {
        let mut temperature = self.initial_temperature;
        let mut steps = 0;
        while temperature > self.floor_temperature {
            temperature = cool(temperature, self.decay);
            steps += 1;
        }
        steps
    }
}

/// One geometric cooling step.
pub(crate) fn cool(temperature: f64, decay: f64) -> f64 {
    temperature * decay
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed_form(config: &AnnealConfig) -> usize {
        let ratio = config.floor_temperature / config.initial_temperature;
        (ratio.ln() / config.decay.ln()).ceil() as usize
    }

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 10_000.0).abs() < 1e-10);
        assert!((config.decay - 0.999).abs() < 1e-15);
        assert!((config.floor_temperature - 2.0).abs() < 1e-15);
        assert_eq!(config.acceptance, Acceptance::Metropolis);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
        assert!(AnnealConfig::new(1.0, 0.5).validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = AnnealConfig::default().with_initial_temperature(-1.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidTemperature(-1.0)));

        let config = AnnealConfig::default().with_initial_temperature(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_floor() {
        let config = AnnealConfig::default().with_floor_temperature(0.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidFloor(0.0)));
    }

    #[test]
    fn test_validate_bad_decay() {
        for decay in [0.0, 1.0, 1.5, -0.3, f64::NAN] {
            let config = AnnealConfig::default().with_decay(decay);
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidDecay(_))),
                "decay {decay} should be rejected"
            );
        }
    }

    #[test]
    fn test_step_budget_matches_closed_form() {
        for (t0, decay, floor) in [
            (100.0, 0.5, 2.0),
            (10_000.0, 0.999, 2.0),
            (1_000.0, 0.99, 2.0),
            (100.0, 0.9, 2.0),
            (10.0, 0.95, 0.05),
        ] {
            let config = AnnealConfig::new(t0, decay).with_floor_temperature(floor);
            assert_eq!(
                config.step_budget(),
                closed_form(&config),
                "T0={t0} decay={decay} floor={floor}"
            );
        }
    }

    #[test]
    fn test_step_budget_small_cases() {
        // 100 -> 50 -> 25 -> 12.5 -> 6.25 -> 3.125 -> 1.5625
        assert_eq!(AnnealConfig::new(100.0, 0.5).step_budget(), 6);
        assert_eq!(AnnealConfig::new(2.0, 0.5).step_budget(), 0);
        assert_eq!(AnnealConfig::new(1.0, 0.5).step_budget(), 0);
    }
}
