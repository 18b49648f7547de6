//! QueenClimb Core - Board, move and score types
//!
//! This crate provides the fundamental types shared by every QueenClimb crate:
//! - `BoardState` for one token placement, one token per column
//! - `QueenMove` for a single-column relocation
//! - `AttackCount` as the objective value the search minimizes
//! - The error taxonomy

pub mod board;
pub mod error;
pub mod moves;
pub mod score;

#[cfg(test)]
mod score_tests;

pub use board::{BoardState, DEFAULT_SIZE};
pub use error::{QueenClimbError, Result};
pub use moves::QueenMove;
pub use score::AttackCount;
