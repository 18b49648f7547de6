//! Scoring for QueenClimb.
//!
//! - `attacks`: the objective function, attacking pairs on a board
//! - `heuristic`: one-move lookahead table over every column/row relocation

pub mod attacks;
pub mod heuristic;

pub use attacks::{attacking_pairs, count_attacks, is_attacking_pair};
pub use heuristic::{build_heuristic_table, HeuristicTable};
