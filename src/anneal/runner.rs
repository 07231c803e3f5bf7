//! Annealing loop.

use rand::Rng;
use tracing::{debug, trace};

use super::config::{cool, Acceptance, AnnealConfig};
use super::types::{AnnealProblem, QueensProblem};
use crate::board::BoardState;
use crate::error::ConfigError;

/// Result of an annealing run.
///
/// `state` is the board held when the loop stopped, not the best board
/// seen: the run ends the moment it reaches zero cost, so the two only
/// differ on runs that never solve.
#[derive(Debug, Clone)]
pub struct AnnealResult<S: Clone> {
    /// Final state.
    pub state: S,

    /// Cost of the final state.
    pub cost: u32,

    /// Number of neighbor evaluations (equal to cooling steps).
    pub steps: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves, including improvements.
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,
}

impl<S: Clone> AnnealResult<S> {
    /// Whether the run ended on a zero-cost state.
    pub fn solved(&self) -> bool {
        self.cost == 0
    }
}

/// Executes simulated annealing.
pub struct Annealer;

impl Annealer {
    /// Anneals `initial` and returns the final board.
    ///
    /// The returned board may still have conflicts if the temperature ran
    /// out first; check [`BoardState::cost`] to tell.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use queens_anneal::anneal::{AnnealConfig, Annealer};
    /// use queens_anneal::board::BoardState;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let start = BoardState::generate_random(&mut rng);
    /// let end = Annealer::run(start, &AnnealConfig::new(100.0, 0.9), &mut rng).unwrap();
    /// println!("cost {}\n{end}", end.cost());
    /// ```
    pub fn run<R: Rng>(
        initial: BoardState,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<BoardState, ConfigError> {
        Self::run_with_stats(&QueensProblem, initial, config, rng).map(|result| result.state)
    }

    /// Generates a random board and anneals it.
    pub fn solve<R: Rng>(
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult<BoardState>, ConfigError> {
        Self::solve_problem(&QueensProblem, config, rng)
    }

    /// Draws a starting state from `problem` and anneals it.
    pub fn solve_problem<P: AnnealProblem, R: Rng>(
        problem: &P,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult<P::State>, ConfigError> {
        let initial = problem.initial_state(rng);
        Self::run_with_stats(problem, initial, config, rng)
    }

    /// Anneals `initial` over any [`AnnealProblem`], returning run statistics.
    ///
    /// Stops as soon as the current state has zero cost (including before
    /// the first step) or once the temperature is no longer above the floor.
    pub fn run_with_stats<P: AnnealProblem, R: Rng>(
        problem: &P,
        initial: P::State,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult<P::State>, ConfigError> {
        config.validate()?;

        let mut current = initial;
        let mut current_cost = problem.cost(&current);
        let mut temperature = config.initial_temperature;
        let mut steps = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        debug!(
            initial_temperature = config.initial_temperature,
            decay = config.decay,
            floor = config.floor_temperature,
            cost = current_cost,
            "annealing started"
        );

        while temperature > config.floor_temperature && current_cost != 0 {
            let neighbor = problem.neighbor(&current, rng);
            let neighbor_cost = problem.cost(&neighbor);
            let delta = i64::from(current_cost) - i64::from(neighbor_cost);

            if accepts(config.acceptance, delta, temperature, rng) {
                if delta > 0 {
                    improving_moves += 1;
                }
                trace!(step = steps, temperature, from = current_cost, to = neighbor_cost, "accepted");
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;
            }

            temperature = cool(temperature, config.decay);
            steps += 1;
        }

        debug!(
            cost = current_cost,
            steps,
            final_temperature = temperature,
            accepted_moves,
            "annealing finished"
        );

        Ok(AnnealResult {
            state: current,
            cost: current_cost,
            steps,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        })
    }
}

/// Metropolis acceptance test for a cost change `delta = cost(current) -
/// cost(neighbor)` at `temperature`.
///
/// A strictly better neighbor (`delta > 0`) is accepted without drawing from
/// `rng`. Otherwise one uniform `[0, 1)` value is drawn and the move is
/// accepted iff `exp(delta / temperature)` exceeds it.
pub fn metropolis_accepts<R: Rng>(delta: i64, temperature: f64, rng: &mut R) -> bool {
    if delta > 0 {
        return true;
    }
    let probability = (delta as f64 / temperature).exp();
    probability > rng.random::<f64>()
}

fn accepts<R: Rng>(acceptance: Acceptance, delta: i64, temperature: f64, rng: &mut R) -> bool {
    match acceptance {
        Acceptance::Metropolis => metropolis_accepts(delta, temperature, rng),
        Acceptance::NonWorsening => {
            if delta > 0 {
                return true;
            }
            let probability = (delta as f64 / temperature).exp().trunc();
            probability > rng.random::<f64>()
        }
    }
}
