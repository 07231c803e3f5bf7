//! Board state: queen placements, conflict cost and the one-queen move.

use std::fmt;

use rand::Rng;

use super::square::Square;
use super::N;
use crate::error::BoardError;

/// A placement of exactly [`N`] queens on distinct squares.
///
/// The queen list is the source of truth; the occupancy grid is a cache kept
/// in step with it for O(1) lookups and rendering. A `BoardState` is a plain
/// value: moves return a new board and never touch the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[Square; N]", into = "[Square; N]")
)]
pub struct BoardState {
    queens: [Square; N],
    grid: [[bool; N]; N],
}

impl BoardState {
    /// Places N queens on uniformly random distinct squares.
    ///
    /// Squares are drawn with replacement and collisions are redrawn, so the
    /// result always has N distinct squares. Rows, columns and diagonals may
    /// be shared freely; a random board is rarely a solution.
    pub fn generate_random<R: Rng>(rng: &mut R) -> Self {
        let mut queens = [Square::new(0, 0); N];
        let mut grid = [[false; N]; N];

        for slot in queens.iter_mut() {
            let square = loop {
                let candidate = Square::random(rng);
                if !grid[candidate.row][candidate.col] {
                    break candidate;
                }
            };
            grid[square.row][square.col] = true;
            *slot = square;
        }

        Self { queens, grid }
    }

    /// Builds a board from an explicit layout.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if a square lies off the board or appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use queens_anneal::board::BoardState;
    ///
    /// let board = BoardState::from_queens([
    ///     (0, 0), (1, 4), (2, 7), (3, 5), (4, 2), (5, 6), (6, 1), (7, 3),
    /// ]).unwrap();
    /// assert_eq!(board.cost(), 0);
    /// ```
    pub fn from_queens(layout: [(usize, usize); N]) -> Result<Self, BoardError> {
        Self::try_from(layout.map(Square::from))
    }

    /// Conflict cost of the placement.
    ///
    /// For each row, column and diagonal holding `k > 1` queens, adds `k`.
    /// This over-counts relative to attacking pairs but is zero exactly when
    /// no line holds two queens.
    pub fn cost(&self) -> u32 {
        let mut rows = [0u32; N];
        let mut cols = [0u32; N];
        let mut diagonals = [0u32; 2 * N];
        let mut anti_diagonals = [0u32; 2 * N];

        for q in &self.queens {
            rows[q.row] += 1;
            cols[q.col] += 1;
            diagonals[q.diagonal()] += 1;
            anti_diagonals[q.anti_diagonal()] += 1;
        }

        [&rows[..], &cols[..], &diagonals[..], &anti_diagonals[..]]
            .into_iter()
            .flatten()
            .filter(|&&k| k > 1)
            .sum()
    }

    /// Moves one uniformly chosen queen to a uniformly chosen empty square.
    ///
    /// The returned board differs from `self` in exactly one queen.
    pub fn make_random_move<R: Rng>(&self, rng: &mut R) -> Self {
        let target = loop {
            let candidate = Square::random(rng);
            if !self.is_occupied(candidate) {
                break candidate;
            }
        };
        let index = rng.random_range(0..N);
        self.relocate(index, target)
    }

    fn relocate(&self, index: usize, target: Square) -> Self {
        let mut next = *self;
        let from = next.queens[index];
        next.grid[from.row][from.col] = false;
        next.grid[target.row][target.col] = true;
        next.queens[index] = target;
        next
    }

    /// Queen coordinates in placement order.
    pub fn queens(&self) -> &[Square; N] {
        &self.queens
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        square.in_bounds() && self.grid[square.row][square.col]
    }

    /// Row-major occupancy grid: `1` for a queen, `0` for an empty square.
    pub fn render(&self) -> [[u8; N]; N] {
        self.grid.map(|row| row.map(u8::from))
    }

    /// Exact number of queen pairs sharing a row, column or diagonal.
    pub fn attacking_pairs(&self) -> usize {
        self.queens
            .iter()
            .enumerate()
            .map(|(i, a)| self.queens[i + 1..].iter().filter(|b| a.attacks(**b)).count())
            .sum()
    }

    pub fn is_solution(&self) -> bool {
        self.cost() == 0
    }
}

impl TryFrom<[Square; N]> for BoardState {
    type Error = BoardError;

    fn try_from(queens: [Square; N]) -> Result<Self, Self::Error> {
        let mut grid = [[false; N]; N];
        for &Square { row, col } in &queens {
            if !Square::new(row, col).in_bounds() {
                return Err(BoardError::OutOfBounds { row, col });
            }
            if grid[row][col] {
                return Err(BoardError::DuplicateSquare { row, col });
            }
            grid[row][col] = true;
        }
        Ok(Self { queens, grid })
    }
}

impl From<BoardState> for [Square; N] {
    fn from(board: BoardState) -> Self {
        board.queens
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render() {
            let cells: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
