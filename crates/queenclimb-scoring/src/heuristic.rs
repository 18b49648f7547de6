//! Heuristic table - exhaustive one-move lookahead.
//!
//! Cell `(file, row)` holds the attack count the board would have if the
//! token in `file` were relocated to `row`, every other token fixed. The
//! table is rebuilt from scratch after every change of the working board.

use std::fmt;

use queenclimb_core::{AttackCount, BoardState};

use crate::attacks::count_attacks;

/// An `N`×`N` table of attack counts indexed by `(file, row)`.
#[derive(Clone, PartialEq, Eq)]
pub struct HeuristicTable<const N: usize> {
    cells: [[usize; N]; N],
}

impl<const N: usize> HeuristicTable<N> {
    /// Creates a table from raw cells, `cells[file][row]`.
    pub fn from_cells(cells: [[usize; N]; N]) -> Self {
        Self { cells }
    }

    /// Returns the attack count for relocating `file` to `row`.
    #[inline]
    pub fn get(&self, file: usize, row: usize) -> AttackCount {
        AttackCount::of(self.cells[file][row])
    }

    /// Returns cell `(0, 0)`, the first cell computed.
    ///
    /// Hosts display it as the evaluation baseline; it has no other meaning.
    pub fn baseline(&self) -> AttackCount {
        self.get(0, 0)
    }

    /// Returns the global minimum over all cells.
    pub fn min(&self) -> AttackCount {
        let min = self
            .cells
            .iter()
            .flat_map(|row| row.iter().copied())
            .min()
            .unwrap_or(0);
        AttackCount::of(min)
    }

    /// Iterates `(file, row, value)` in row-major order, file outer.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, AttackCount)> + '_ {
        self.cells.iter().enumerate().flat_map(|(file, rows)| {
            rows.iter()
                .enumerate()
                .map(move |(row, &value)| (file, row, AttackCount::of(value)))
        })
    }

    /// Returns the raw cells.
    pub fn cells(&self) -> &[[usize; N]; N] {
        &self.cells
    }
}

impl<const N: usize> fmt::Debug for HeuristicTable<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeuristicTable")
            .field("size", &N)
            .field("cells", &self.cells)
            .finish()
    }
}

/// Renders one line per file with the value of every destination row.
impl<const N: usize> fmt::Display for HeuristicTable<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (file, rows) in self.cells.iter().enumerate() {
            write!(f, "{:>2}:", file)?;
            for value in rows {
                write!(f, " {:>3}", value)?;
            }
            if file + 1 < N {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

/// Builds the full heuristic table for `state`.
///
/// Every cell is scored on a fresh trial copy, so `state` is left as it was.
/// The no-move cell `(i, state.row(i))` equals `count_attacks(state)`.
///
/// # Examples
///
/// ```
/// use queenclimb_core::{AttackCount, BoardState};
/// use queenclimb_scoring::{build_heuristic_table, count_attacks};
///
/// let board: BoardState = BoardState::new(&[0, 0, 0, 0, 0, 0]).unwrap();
/// let table = build_heuristic_table(&board);
///
/// assert_eq!(table.get(0, 0), count_attacks(&board));
/// assert_eq!(table.min(), AttackCount::of(10));
/// ```
pub fn build_heuristic_table<const N: usize>(state: &BoardState<N>) -> HeuristicTable<N> {
    let mut cells = [[0; N]; N];
    for (file, rows) in cells.iter_mut().enumerate() {
        for (row, cell) in rows.iter_mut().enumerate() {
            let trial = state.with_row(file, row);
            *cell = count_attacks(&trial).get();
        }
    }
    HeuristicTable { cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queenclimb_test::boards;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_no_move_cell_equals_current_score() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let board = BoardState::<6>::random(&mut rng);
            let table = build_heuristic_table(&board);
            let current = count_attacks(&board);
            for file in 0..6 {
                assert_eq!(table.get(file, board.row(file)), current);
            }
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let board = boards::six(&[0, 0, 0, 1, 3, 0]);
        let before = board.clone();
        let _ = build_heuristic_table(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_cells_match_trial_boards() {
        let board = boards::six(&[0, 0, 0, 1, 3, 0]);
        let table = build_heuristic_table(&board);
        assert_eq!(table.cells()[1], [8, 7, 4, 6, 5, 4]);
        assert_eq!(table.cells()[3], [11, 8, 10, 9, 8, 7]);
        assert_eq!(table.min(), AttackCount::of(4));
    }

    #[test]
    fn test_stacked_table() {
        let table = build_heuristic_table(&boards::stacked());
        assert_eq!(table.baseline(), AttackCount::of(15));
        assert_eq!(table.cells()[0], [15, 11, 11, 11, 11, 11]);
        assert_eq!(table.cells()[2], [15, 12, 12, 11, 10, 10]);
        assert_eq!(table.min(), AttackCount::of(10));
    }

    #[test]
    fn test_iter_row_major() {
        let table = HeuristicTable::<2>::from_cells([[1, 2], [3, 4]]);
        let cells: Vec<_> = table.iter().map(|(f, r, v)| (f, r, v.get())).collect();
        assert_eq!(cells, vec![(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 4)]);
    }

    #[test]
    fn test_display() {
        let table = HeuristicTable::<2>::from_cells([[1, 2], [13, 4]]);
        assert_eq!(table.to_string(), " 0:   1   2\n 1:  13   4");
    }
}
