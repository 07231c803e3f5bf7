//! The 8-queens board.
//!
//! [`BoardState`] holds one queen per chosen square (not one per row: any
//! square may hold a queen) and provides the three ingredients the annealer
//! needs: a random starting board, the conflict cost, and a random
//! single-queen move.

mod square;
mod state;

pub use square::Square;
pub use state::BoardState;

/// Board side length and number of queens.
pub const N: usize = 8;
