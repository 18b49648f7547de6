//! BoardState - one placement of N tokens, one per column.
//!
//! Index `i` of the position array is the column (the "file") and the value
//! at `i` is the row occupied by the token in that column. The shape never
//! changes; only the row values do. Attacks are allowed and counted by the
//! scoring crate, they are never prevented here.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{QueenClimbError, Result};

/// Board size used when no size is named.
pub const DEFAULT_SIZE: usize = 6;

/// A placement of `N` tokens on an `N`×`N` grid.
///
/// # Examples
///
/// ```
/// use queenclimb_core::BoardState;
///
/// let board: BoardState = BoardState::new(&[1, 3, 5, 0, 2, 4]).unwrap();
/// assert_eq!(board.row(2), 5);
///
/// let mut working = board.clone();
/// working.set_row(2, 0);
/// assert_eq!(board.row(2), 5);
/// assert_eq!(working.row(2), 0);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct BoardState<const N: usize = DEFAULT_SIZE> {
    positions: [usize; N],
}

impl<const N: usize> BoardState<N> {
    /// Creates a board from one row per column.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `rows` does not have exactly `N` values
    /// or any value lies outside `[0, N)`.
    pub fn new(rows: &[usize]) -> Result<Self> {
        if rows.len() != N {
            return Err(QueenClimbError::InvalidArgument(format!(
                "expected {} rows, got {}",
                N,
                rows.len()
            )));
        }
        let mut positions = [0; N];
        for (file, &row) in rows.iter().enumerate() {
            if row >= N {
                return Err(QueenClimbError::InvalidArgument(format!(
                    "row {} in column {} is outside 0..{}",
                    row, file, N
                )));
            }
            positions[file] = row;
        }
        Ok(Self { positions })
    }

    /// Creates a board with `N` independent uniform row draws.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut positions = [0; N];
        for row in positions.iter_mut() {
            *row = rng.random_range(0..N);
        }
        Self { positions }
    }

    /// Returns the board size.
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns the row of the token in `file`.
    #[inline]
    pub fn row(&self, file: usize) -> usize {
        self.positions[file]
    }

    /// Returns all rows, indexed by column.
    #[inline]
    pub fn rows(&self) -> &[usize; N] {
        &self.positions
    }

    /// Moves the token in `file` to `row`.
    ///
    /// The caller supplies a row in `[0, N)`; search code only passes rows
    /// taken from heuristic table coordinates.
    #[inline]
    pub fn set_row(&mut self, file: usize, row: usize) {
        debug_assert!(row < N, "row {} outside 0..{}", row, N);
        self.positions[file] = row;
    }

    /// Returns a copy of this board with `file` moved to `row`.
    pub fn with_row(&self, file: usize, row: usize) -> Self {
        let mut trial = self.clone();
        trial.set_row(file, row);
        trial
    }
}

impl<const N: usize> fmt::Debug for BoardState<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardState({:?})", self.positions)
    }
}

/// Renders the board as a text grid, row 0 first, `Q` marking tokens.
impl<const N: usize> fmt::Display for BoardState<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            for file in 0..N {
                if file > 0 {
                    f.write_str(" ")?;
                }
                let cell = if self.positions[file] == row { "Q" } else { "." };
                f.write_str(cell)?;
            }
            if row + 1 < N {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> TryFrom<&[usize]> for BoardState<N> {
    type Error = QueenClimbError;

    fn try_from(rows: &[usize]) -> Result<Self> {
        Self::new(rows)
    }
}

impl<const N: usize> TryFrom<Vec<usize>> for BoardState<N> {
    type Error = QueenClimbError;

    fn try_from(rows: Vec<usize>) -> Result<Self> {
        Self::new(&rows)
    }
}

impl<const N: usize> From<BoardState<N>> for Vec<usize> {
    fn from(board: BoardState<N>) -> Self {
        board.positions.to_vec()
    }
}

/// Parses comma separated rows, e.g. `"0,0,0,0,0,0"`.
impl<const N: usize> FromStr for BoardState<N> {
    type Err = QueenClimbError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<usize>().map_err(|_| {
                    QueenClimbError::InvalidArgument(format!("'{}' is not a row index", part))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_accepts_valid_rows() {
        let board: BoardState = BoardState::new(&[0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(board.rows(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(board.size(), 6);
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = BoardState::<6>::new(&[0, 1, 2]).unwrap_err();
        assert!(matches!(err, QueenClimbError::InvalidArgument(_)));
    }

    #[test]
    fn test_new_rejects_out_of_range_row() {
        let err = BoardState::<6>::new(&[0, 1, 2, 3, 4, 6]).unwrap_err();
        assert!(matches!(err, QueenClimbError::InvalidArgument(_)));
    }

    #[test]
    fn test_clone_is_independent() {
        let reference: BoardState = BoardState::new(&[0, 0, 0, 0, 0, 0]).unwrap();
        let mut working = reference.clone();
        working.set_row(3, 4);

        assert_eq!(reference.row(3), 0);
        assert_eq!(working.row(3), 4);
    }

    #[test]
    fn test_with_row_leaves_source_untouched() {
        let board: BoardState = BoardState::new(&[2, 2, 2, 2, 2, 2]).unwrap();
        let trial = board.with_row(0, 5);
        assert_eq!(board.row(0), 2);
        assert_eq!(trial.row(0), 5);
    }

    #[test]
    fn test_random_rows_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let board = BoardState::<6>::random(&mut rng);
            assert!(board.rows().iter().all(|&r| r < 6));
        }
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let a = BoardState::<6>::random(&mut ChaCha8Rng::seed_from_u64(99));
        let b = BoardState::<6>::random(&mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_str() {
        let board: BoardState = " 1, 3,5,0,2 ,4".parse().unwrap();
        assert_eq!(board.rows(), &[1, 3, 5, 0, 2, 4]);

        assert!("1,3,x,0,2,4".parse::<BoardState>().is_err());
        assert!("1,3,5".parse::<BoardState>().is_err());
    }

    #[test]
    fn test_display_grid() {
        let board = BoardState::<4>::new(&[1, 3, 0, 2]).unwrap();
        let expected = ". . Q .\nQ . . .\n. . . Q\n. Q . .";
        assert_eq!(board.to_string(), expected);
    }
}
