//! Shared test fixtures for QueenClimb crates.
//!
//! - `boards`: known boards (6-queens solutions, worst case, plateau traps,
//!   a stalled 7-column board)
//! - `rng`: seeded random sources for reproducible searches

pub mod boards;
pub mod rng;
