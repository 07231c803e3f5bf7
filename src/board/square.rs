//! Board coordinates.

use super::N;
use rand::Rng;

/// A `(row, col)` coordinate on the board, both in `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Uniformly random square anywhere on the board.
    pub(crate) fn random<R: Rng>(rng: &mut R) -> Self {
        Self::new(rng.random_range(0..N), rng.random_range(0..N))
    }

    pub const fn in_bounds(self) -> bool {
        self.row < N && self.col < N
    }

    /// Index of the "\" diagonal through this square, in `[0, 2N - 1)`.
    pub(crate) const fn diagonal(self) -> usize {
        self.row + (N - 1) - self.col
    }

    /// Index of the "/" diagonal through this square, in `[0, 2N - 1)`.
    pub(crate) const fn anti_diagonal(self) -> usize {
        self.row + self.col
    }

    /// Whether a queen here and a queen on `other` share a row, column or
    /// diagonal. A square never attacks itself.
    pub fn attacks(self, other: Square) -> bool {
        self != other
            && (self.row == other.row
                || self.col == other.col
                || self.diagonal() == other.diagonal()
                || self.anti_diagonal() == other.anti_diagonal())
    }
}

impl From<(usize, usize)> for Square {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_indices_cover_board() {
        for row in 0..N {
            for col in 0..N {
                let sq = Square::new(row, col);
                assert!(sq.diagonal() < 2 * N - 1);
                assert!(sq.anti_diagonal() < 2 * N - 1);
            }
        }
    }

    #[test]
    fn test_attacks() {
        let a = Square::new(3, 3);
        assert!(a.attacks(Square::new(3, 7)));
        assert!(a.attacks(Square::new(0, 3)));
        assert!(a.attacks(Square::new(5, 5)));
        assert!(a.attacks(Square::new(1, 5)));
        assert!(!a.attacks(Square::new(4, 5)));
        assert!(!a.attacks(a));
    }

    #[test]
    fn test_in_bounds() {
        assert!(Square::new(7, 7).in_bounds());
        assert!(!Square::new(8, 0).in_bounds());
        assert!(!Square::new(0, 8).in_bounds());
    }
}
