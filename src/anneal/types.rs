//! Core trait for the annealing loop.

use rand::Rng;

use crate::board::BoardState;

/// A search space the annealer can walk.
///
/// The implementor supplies integer cost evaluation and neighbor generation;
/// the annealer handles temperature, acceptance and termination. Cost zero
/// is the goal and ends the run.
///
/// # Examples
///
/// ```
/// use queens_anneal::anneal::AnnealProblem;
/// use rand::Rng;
///
/// /// Walk towards zero on the integers.
/// struct Distance;
///
/// impl AnnealProblem for Distance {
///     type State = i64;
///
///     fn initial_state<R: Rng>(&self, rng: &mut R) -> i64 {
///         rng.random_range(-100..100)
///     }
///
///     fn cost(&self, x: &i64) -> u32 {
///         x.unsigned_abs() as u32
///     }
///
///     fn neighbor<R: Rng>(&self, x: &i64, rng: &mut R) -> i64 {
///         if rng.random_bool(0.5) { x + 1 } else { x - 1 }
///     }
/// }
/// ```
pub trait AnnealProblem {
    /// The state representation.
    type State: Clone;

    /// Creates a random starting state.
    fn initial_state<R: Rng>(&self, rng: &mut R) -> Self::State;

    /// Cost of a state. Lower is better; zero is a solution.
    fn cost(&self, state: &Self::State) -> u32;

    /// Generates a random neighbor of `state` without modifying it.
    fn neighbor<R: Rng>(&self, state: &Self::State, rng: &mut R) -> Self::State;
}

/// The 8-queens placement problem over [`BoardState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QueensProblem;

impl AnnealProblem for QueensProblem {
    type State = BoardState;

    fn initial_state<R: Rng>(&self, rng: &mut R) -> BoardState {
        BoardState::generate_random(rng)
    }

    fn cost(&self, state: &BoardState) -> u32 {
        state.cost()
    }

    fn neighbor<R: Rng>(&self, state: &BoardState, rng: &mut R) -> BoardState {
        state.make_random_move(rng)
    }
}
