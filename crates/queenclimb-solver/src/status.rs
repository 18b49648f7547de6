//! Search status and read-back values for hosts.

use std::fmt;

use queenclimb_core::{AttackCount, BoardState};

/// Where the controller stands after the last change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchStatus {
    /// Freshly reset, no move applied yet, a move is available.
    Idle,
    /// Attacks remain and a chosen move exists.
    Searching,
    /// No attacking pairs.
    Solved,
    /// Attacks remain but no candidate move exists (local optimum).
    Stalled,
}

impl SearchStatus {
    /// Returns true when `step` can no longer advance the search.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchStatus::Solved | SearchStatus::Stalled)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchStatus::Idle => "idle",
            SearchStatus::Searching => "searching",
            SearchStatus::Solved => "solved",
            SearchStatus::Stalled => "stalled",
        };
        f.write_str(name)
    }
}

/// Why a run-to-completion call returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StopReason {
    Solved,
    Stalled,
    /// The configured step limit ended the run before a terminal state.
    StepLimitReached,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StopReason::Solved => "solved",
            StopReason::Stalled => "stalled",
            StopReason::StepLimitReached => "step_limit_reached",
        };
        f.write_str(name)
    }
}

/// Owned copy of everything a host displays after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchSnapshot<const N: usize> {
    /// Starting board of the session, never searched.
    pub reference: BoardState<N>,
    /// Board mutated by the search.
    pub working: BoardState<N>,
    pub attacks_reference: AttackCount,
    pub attacks_working: AttackCount,
    /// Moves applied since the last reset.
    pub move_count: u64,
    pub status: SearchStatus,
}

/// Result of a run-to-completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunOutcome<const N: usize> {
    pub snapshot: SearchSnapshot<N>,
    /// Steps applied during this call only.
    pub steps_taken: u64,
    pub stop_reason: StopReason,
}
