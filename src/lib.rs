//! Simulated-annealing local search for the 8-queens problem.
//!
//! - **Board**: [`board::BoardState`], a value-type placement of 8 queens on
//!   distinct squares with its conflict cost and the random one-queen move.
//! - **Annealing**: [`anneal::Annealer`], the Metropolis random walk with
//!   geometric cooling that drives a board towards zero cost.
//! - **Sweep**: [`sweep::SweepRunner`], a parameter-grid experiment that
//!   averages final cost and wall time over repeated seeded runs.
//!
//! All randomness is passed in explicitly as a [`rand::Rng`], so every run is
//! reproducible from a seed.
//!
//! ```
//! use queens_anneal::anneal::{AnnealConfig, Annealer};
//! use queens_anneal::board::BoardState;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let start = BoardState::generate_random(&mut rng);
//! let config = AnnealConfig::new(10.0, 0.9995).with_floor_temperature(0.01);
//! let end = Annealer::run(start, &config, &mut rng).unwrap();
//! assert_eq!(end.queens().len(), 8);
//! ```

pub mod anneal;
pub mod board;
pub mod error;
pub mod sweep;

pub use error::{BoardError, ConfigError, Error, Result};
