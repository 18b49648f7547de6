//! Board fixtures.
//!
//! # Example
//!
//! ```
//! use queenclimb_test::boards;
//!
//! let trap = boards::plateau_trap();
//! assert_eq!(trap.rows(), &[0, 2, 4, 1, 3, 0]);
//! ```

use queenclimb_core::BoardState;

/// Builds a 6-column board, panicking on invalid rows.
pub fn six(rows: &[usize]) -> BoardState<6> {
    BoardState::new(rows).unwrap_or_else(|e| panic!("invalid fixture {:?}: {}", rows, e))
}

/// All tokens on row 0: every one of the 15 pairs attacks.
pub fn stacked() -> BoardState<6> {
    six(&[0, 0, 0, 0, 0, 0])
}

/// The canonical 6-queens solution.
pub fn solved() -> BoardState<6> {
    six(&[1, 3, 5, 0, 2, 4])
}

/// All four 6-queens solutions.
pub fn six_queens_solutions() -> Vec<BoardState<6>> {
    vec![
        six(&[1, 3, 5, 0, 2, 4]),
        six(&[2, 5, 1, 4, 0, 3]),
        six(&[3, 0, 4, 1, 5, 2]),
        six(&[4, 2, 0, 5, 3, 1]),
    ]
}

/// A one-attack plateau with no exit.
///
/// Its only candidate moves are `(0, 5)` and `(5, 5)`; every board they lead
/// to has the same shape, so greedy descent cycles among these four boards
/// forever:
///
/// `[0,2,4,1,3,0]`, `[0,2,4,1,3,5]`, `[5,2,4,1,3,0]`, `[5,2,4,1,3,5]`.
pub fn plateau_trap() -> BoardState<6> {
    six(&[0, 2, 4, 1, 3, 0])
}

/// The four boards reachable from [`plateau_trap`], itself included.
pub fn plateau_trap_cycle() -> Vec<BoardState<6>> {
    vec![
        six(&[0, 2, 4, 1, 3, 0]),
        six(&[0, 2, 4, 1, 3, 5]),
        six(&[5, 2, 4, 1, 3, 0]),
        six(&[5, 2, 4, 1, 3, 5]),
    ]
}

/// A 7-column local optimum: one attacking pair and no candidate move.
///
/// The table minimum of 1 is only reached on no-move cells, so the search
/// is stalled from the start. No 4, 5 or 6 column board behaves this way.
pub fn stalled_seven() -> BoardState<7> {
    BoardState::new(&[0, 6, 4, 2, 5, 3, 1])
        .unwrap_or_else(|e| panic!("invalid fixture: {}", e))
}
