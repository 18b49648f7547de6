//! QueenClimb Solver Engine
//!
//! This crate provides the greedy hill-climbing search:
//! - Best-move selection with uniform random tie-breaking
//! - The search controller with step, run and reset operations
//! - Search status, snapshots and statistics
//! - Configuration wiring (builder module)

pub mod builder;
pub mod controller;
pub mod selector;
pub mod stats;
pub mod status;


pub use controller::SearchController;
pub use selector::{choose_one, select_best_moves};
pub use stats::SearchStats;
pub use status::{RunOutcome, SearchSnapshot, SearchStatus, StopReason};
