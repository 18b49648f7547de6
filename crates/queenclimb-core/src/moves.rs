//! QueenMove - relocates the token of one column to another row.

use std::fmt;

/// A single-column relocation: the token in `file` moves to `to_row`.
///
/// Moves are transient. They are produced by the move selector from
/// heuristic table coordinates and applied once by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueenMove {
    /// Column whose token moves.
    pub file: usize,
    /// Destination row.
    pub to_row: usize,
}

impl QueenMove {
    pub const fn new(file: usize, to_row: usize) -> Self {
        Self { file, to_row }
    }
}

impl fmt::Display for QueenMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.to_row)
    }
}

impl From<(usize, usize)> for QueenMove {
    fn from((file, to_row): (usize, usize)) -> Self {
        Self::new(file, to_row)
    }
}
