//! Best-move selection.
//!
//! Candidates are the cells of the heuristic table at the global minimum,
//! excluding the no-move cell of each column. One candidate is then drawn
//! uniformly at random.

use rand::seq::IndexedRandom;
use rand::Rng;

use queenclimb_core::{BoardState, QueenClimbError, QueenMove, Result};
use queenclimb_scoring::HeuristicTable;

/// Collects every move whose table value equals the table minimum.
///
/// The running best is seeded from cell `(0, 0)` before the no-move
/// exclusion applies, then the table is scanned file-major. A strictly
/// smaller value discards what was collected; an equal value is kept unless
/// it is the column's current row. When the minimum is only reached by
/// no-move cells the result is empty, which callers treat as a local
/// optimum.
///
/// # Examples
///
/// ```
/// use queenclimb_core::{BoardState, QueenMove};
/// use queenclimb_scoring::build_heuristic_table;
/// use queenclimb_solver::select_best_moves;
///
/// let board: BoardState = BoardState::new(&[0, 2, 4, 1, 3, 0]).unwrap();
/// let table = build_heuristic_table(&board);
///
/// let moves = select_best_moves(&table, &board);
/// assert_eq!(moves, vec![QueenMove::new(0, 5), QueenMove::new(5, 5)]);
/// ```
pub fn select_best_moves<const N: usize>(
    table: &HeuristicTable<N>,
    state: &BoardState<N>,
) -> Vec<QueenMove> {
    let mut best = table.baseline();
    let mut candidates = Vec::new();

    for (file, row, value) in table.iter() {
        if value < best {
            best = value;
            candidates.clear();
        }
        if value == best && row != state.row(file) {
            candidates.push(QueenMove::new(file, row));
        }
    }

    candidates
}

/// Picks one candidate uniformly at random.
///
/// # Errors
///
/// Returns `EmptyInput` when `candidates` is empty.
pub fn choose_one<R: Rng + ?Sized>(candidates: &[QueenMove], rng: &mut R) -> Result<QueenMove> {
    candidates
        .choose(rng)
        .copied()
        .ok_or(QueenClimbError::EmptyInput)
}
