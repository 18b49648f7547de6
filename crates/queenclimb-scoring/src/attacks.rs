//! Attack counting.

use queenclimb_core::{AttackCount, BoardState};

/// Returns true if the tokens of columns `i < j` attack each other.
///
/// Two tokens attack when they share a row or a diagonal, i.e. the row
/// distance equals the column distance.
#[inline]
pub fn is_attacking_pair<const N: usize>(state: &BoardState<N>, i: usize, j: usize) -> bool {
    let (ri, rj) = (state.row(i), state.row(j));
    ri == rj || ri.abs_diff(rj) == j - i
}

/// Counts unordered attacking pairs of columns.
///
/// # Examples
///
/// ```
/// use queenclimb_core::{AttackCount, BoardState};
/// use queenclimb_scoring::count_attacks;
///
/// let solved: BoardState = BoardState::new(&[1, 3, 5, 0, 2, 4]).unwrap();
/// assert_eq!(count_attacks(&solved), AttackCount::ZERO);
///
/// let stacked: BoardState = BoardState::new(&[0, 0, 0, 0, 0, 0]).unwrap();
/// assert_eq!(count_attacks(&stacked), AttackCount::of(15));
/// ```
pub fn count_attacks<const N: usize>(state: &BoardState<N>) -> AttackCount {
    let mut attacks = 0;
    for i in 0..N {
        for j in (i + 1)..N {
            if is_attacking_pair(state, i, j) {
                attacks += 1;
            }
        }
    }
    AttackCount::of(attacks)
}

/// Lists the attacking column pairs `(i, j)` with `i < j`, in scan order.
pub fn attacking_pairs<const N: usize>(state: &BoardState<N>) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..N {
        for j in (i + 1)..N {
            if is_attacking_pair(state, i, j) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
