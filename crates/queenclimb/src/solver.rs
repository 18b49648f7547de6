//! One-call search entry point.

use queenclimb_config::SearchConfig;
use queenclimb_core::{Result, DEFAULT_SIZE};
use queenclimb_solver::{RunOutcome, SearchController};

/// Step limit the command-line host applies when none is configured.
pub const CLI_DEFAULT_STEP_LIMIT: u64 = 10_000;

/// Builds a controller from `config` and runs it to completion.
///
/// The configured step limit applies as is; without one the run only ends
/// on a solved or stalled board.
pub fn solve(config: &SearchConfig) -> Result<RunOutcome<DEFAULT_SIZE>> {
    let mut controller = SearchController::<DEFAULT_SIZE>::from_config(config)?;
    Ok(controller.run_to_completion())
}
