//! AttackCount - the objective value of a board.

use std::fmt;

/// Number of attacking pairs on a board.
///
/// Lower is better and zero is the goal. Ordering follows the raw count, so
/// `a < b` means `a` is the better board.
///
/// # Examples
///
/// ```
/// use queenclimb_core::AttackCount;
///
/// let current = AttackCount::of(4);
/// let candidate = AttackCount::of(2);
///
/// assert!(candidate < current);
/// assert!(!current.is_solved());
/// assert!(AttackCount::ZERO.is_solved());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AttackCount(usize);

impl AttackCount {
    /// No attacking pairs.
    pub const ZERO: AttackCount = AttackCount(0);

    #[inline]
    pub const fn of(count: usize) -> Self {
        AttackCount(count)
    }

    /// Returns the raw pair count.
    #[inline]
    pub const fn get(&self) -> usize {
        self.0
    }

    /// Returns true when no pair attacks.
    #[inline]
    pub const fn is_solved(&self) -> bool {
        self.0 == 0
    }

    /// Returns the maximum count for an `n`-token board, `n·(n-1)/2`.
    pub const fn max_for(n: usize) -> Self {
        AttackCount(n * n.saturating_sub(1) / 2)
    }
}

impl fmt::Debug for AttackCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttackCount({})", self.0)
    }
}

impl fmt::Display for AttackCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AttackCount> for usize {
    fn from(count: AttackCount) -> Self {
        count.0
    }
}
