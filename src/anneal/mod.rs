//! Simulated annealing over board states.
//!
//! A temperature-decaying random walk: at each step a random neighbor is
//! proposed, strictly better neighbors are always taken, and the rest are
//! taken with the Metropolis probability `exp(delta / T)`. Temperature is
//! multiplied by a fixed decay after every step. The walk stops at the
//! first zero-cost state or once the temperature reaches the floor.
//!
//! # References
//!
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod runner;
mod types;

pub use config::{Acceptance, AnnealConfig, DEFAULT_FLOOR_TEMPERATURE};
pub use runner::{metropolis_accepts, AnnealResult, Annealer};
pub use types::{AnnealProblem, QueensProblem};
