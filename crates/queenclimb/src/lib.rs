//! QueenClimb - Greedy hill climbing for the N-Queens puzzle
//!
//! One token per column; the search relocates one token at a time to the
//! row that minimizes attacking pairs, breaking ties at random.
//!
//! # Example
//!
//! ```rust
//! use queenclimb::prelude::*;
//!
//! let config = SearchConfig::new()
//!     .with_random_seed(3)
//!     .with_initial_rows(vec![0, 0, 0, 0, 0, 0])
//!     .with_step_limit(10_000);
//!
//! let outcome = queenclimb::solve(&config).unwrap();
//! assert_eq!(outcome.stop_reason, StopReason::Solved);
//! assert_eq!(outcome.snapshot.attacks_working, AttackCount::ZERO);
//! ```

// Core types
pub use queenclimb_core::{
    AttackCount, BoardState, QueenClimbError, QueenMove, Result, DEFAULT_SIZE,
};

// Scoring
pub use queenclimb_scoring::{
    attacking_pairs, build_heuristic_table, count_attacks, HeuristicTable,
};

// Search
pub use queenclimb_solver::{
    choose_one, select_best_moves, RunOutcome, SearchController, SearchSnapshot, SearchStats,
    SearchStatus, StopReason,
};

// Configuration
pub use queenclimb_config::{ConfigError, LoggingConfig, SearchConfig, DEFAULT_CONFIG_FILE};

// Console output
pub use queenclimb_console as console;

mod solver;
pub use solver::{solve, CLI_DEFAULT_STEP_LIMIT};

pub mod prelude {
    pub use super::{AttackCount, BoardState, QueenMove};
    pub use super::{RunOutcome, SearchController, SearchSnapshot, SearchStatus, StopReason};
    pub use super::{SearchConfig, HeuristicTable};
}
