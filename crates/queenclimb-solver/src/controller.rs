//! Search controller - step, run and reset over one working board.
//!
//! The controller owns two boards: the reference board, drawn once per
//! reset and only kept for display, and the working board that every
//! accepted move mutates. After each change of the working board it
//! rebuilds the heuristic table, the candidate set and the chosen move.
//!
//! The random source is injected at construction and is the only source of
//! randomness, for both the reference board and tie-breaking.

use std::fmt::Debug;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use queenclimb_core::{AttackCount, BoardState, QueenClimbError, QueenMove, Result, DEFAULT_SIZE};
use queenclimb_scoring::{build_heuristic_table, count_attacks, HeuristicTable};

use crate::selector::{choose_one, select_best_moves};
use crate::stats::SearchStats;
use crate::status::{RunOutcome, SearchSnapshot, SearchStatus, StopReason};

/// Greedy hill-climbing controller.
///
/// Every mutating operation takes `&mut self`, so operations never overlap.
/// A concurrent host wraps the controller in its own lock.
///
/// # Type Parameters
/// * `N` - Board size
/// * `R` - Random source
///
/// # Example
///
/// ```
/// use queenclimb_core::BoardState;
/// use queenclimb_solver::{SearchController, StopReason};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let start: BoardState = BoardState::new(&[0, 0, 0, 0, 0, 0]).unwrap();
/// let mut controller = SearchController::from_board(start, StdRng::seed_from_u64(7))
///     .with_step_limit(Some(10_000));
///
/// let outcome = controller.run_to_completion();
/// assert_eq!(outcome.stop_reason, StopReason::Solved);
/// assert!(outcome.snapshot.attacks_working.is_solved());
/// ```
pub struct SearchController<const N: usize = DEFAULT_SIZE, R = StdRng> {
    reference: BoardState<N>,
    working: BoardState<N>,
    attacks_reference: AttackCount,
    attacks_working: AttackCount,
    move_count: u64,
    table: HeuristicTable<N>,
    candidates: Vec<QueenMove>,
    chosen: Option<QueenMove>,
    rng: R,
    step_limit: Option<u64>,
    stats: SearchStats,
}

impl SearchController<DEFAULT_SIZE, StdRng> {
    /// Creates a controller on a random board, seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a controller on a random board with a seeded `StdRng`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for SearchController<DEFAULT_SIZE, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, R: Rng> SearchController<N, R> {
    /// Creates a controller whose reference board is drawn from `rng`.
    pub fn with_rng(mut rng: R) -> Self {
        let reference = BoardState::random(&mut rng);
        Self::from_board(reference, rng)
    }

    /// Creates a controller starting from a fixed reference board.
    pub fn from_board(reference: BoardState<N>, rng: R) -> Self {
        let working = reference.clone();
        let attacks = count_attacks(&reference);
        let mut controller = Self {
            reference,
            working,
            attacks_reference: attacks,
            attacks_working: attacks,
            move_count: 0,
            table: HeuristicTable::from_cells([[0; N]; N]),
            candidates: Vec::new(),
            chosen: None,
            rng,
            step_limit: None,
            stats: SearchStats::default(),
        };
        controller.stats.start();
        controller.refresh();
        controller.log_reset();
        controller
    }

    /// Caps the number of steps a single `run_to_completion` call applies.
    ///
    /// `None`, the default, lets a run continue until the board is solved
    /// or stalled. Greedy descent has no cycle detection, so an unbounded
    /// run on a closed plateau never returns.
    pub fn with_step_limit(mut self, step_limit: Option<u64>) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Sets the run step limit in place.
    pub fn set_step_limit(&mut self, step_limit: Option<u64>) {
        self.step_limit = step_limit;
    }

    /// Draws a new random reference board and restarts the search from it.
    pub fn reset(&mut self) -> SearchSnapshot<N> {
        let reference = BoardState::random(&mut self.rng);
        self.reset_to(reference)
    }

    /// Restarts the search from the given reference board.
    pub fn reset_to(&mut self, reference: BoardState<N>) -> SearchSnapshot<N> {
        self.attacks_reference = count_attacks(&reference);
        self.working = reference.clone();
        self.reference = reference;
        self.move_count = 0;
        self.stats.record_reset();
        self.refresh();
        self.log_reset();
        self.snapshot()
    }

    /// Applies the chosen move, if the search can advance.
    ///
    /// On a solved or stalled board this is a no-op; use [`try_step`] to get
    /// the rejection as an error.
    ///
    /// [`try_step`]: SearchController::try_step
    pub fn step(&mut self) -> SearchSnapshot<N> {
        if let Err(reason) = self.apply_chosen() {
            debug!(event = "step_rejected", reason = %reason);
        }
        self.snapshot()
    }

    /// Applies the chosen move and returns it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` when the board is already solved and
    /// `EmptyInput` when no candidate move exists.
    pub fn try_step(&mut self) -> Result<QueenMove> {
        self.apply_chosen()
    }

    /// Steps until the board is solved or stalled, or the step limit hits.
    pub fn run_to_completion(&mut self) -> RunOutcome<N> {
        let run_start = Instant::now();
        let mut steps_taken: u64 = 0;

        let stop_reason = loop {
            match self.status() {
                SearchStatus::Solved => break StopReason::Solved,
                SearchStatus::Stalled => break StopReason::Stalled,
                SearchStatus::Idle | SearchStatus::Searching => {}
            }

            if let Some(limit) = self.step_limit {
                if steps_taken >= limit {
                    warn!(
                        event = "step_limit",
                        limit = limit,
                        attacks = self.attacks_working.get(),
                    );
                    break StopReason::StepLimitReached;
                }
            }

            if self.apply_chosen().is_ok() {
                steps_taken += 1;
            }
        };

        info!(
            event = "run_end",
            steps = steps_taken,
            moves = self.move_count,
            attacks = self.attacks_working.get(),
            reason = %stop_reason,
            duration_ms = run_start.elapsed().as_millis() as u64,
        );

        RunOutcome {
            snapshot: self.snapshot(),
            steps_taken,
            stop_reason,
        }
    }

    fn apply_chosen(&mut self) -> Result<QueenMove> {
        if self.attacks_working.is_solved() {
            return Err(QueenClimbError::InvalidState(
                "board is already solved".to_string(),
            ));
        }
        let chosen = self.chosen.ok_or(QueenClimbError::EmptyInput)?;

        let before = self.attacks_working;
        self.working.set_row(chosen.file, chosen.to_row);
        self.move_count += 1;
        self.refresh();
        self.stats.record_step(before, self.attacks_working);

        debug!(
            event = "step",
            step = self.move_count,
            file = chosen.file,
            to_row = chosen.to_row,
            attacks = self.attacks_working.get(),
            candidates = self.candidates.len(),
        );

        Ok(chosen)
    }

    fn log_reset(&self) {
        info!(
            event = "reset",
            attacks = self.attacks_reference.get(),
            move_count = self.move_count,
            candidates = self.candidates.len(),
            status = %self.status(),
        );
    }

    // Rebuilds every value derived from the working board.
    fn refresh(&mut self) {
        self.attacks_working = count_attacks(&self.working);
        self.table = build_heuristic_table(&self.working);
        self.candidates = select_best_moves(&self.table, &self.working);
        self.chosen = choose_one(&self.candidates, &mut self.rng).ok();
        self.stats.record_evaluation();

        trace!(
            event = "evaluate",
            baseline = self.table.baseline().get(),
            best = self.table.min().get(),
            candidates = self.candidates.len(),
        );
    }
}

impl<const N: usize, R> SearchController<N, R> {
    /// Returns the current status.
    pub fn status(&self) -> SearchStatus {
        if self.attacks_working.is_solved() {
            SearchStatus::Solved
        } else if self.chosen.is_none() {
            SearchStatus::Stalled
        } else if self.move_count == 0 {
            SearchStatus::Idle
        } else {
            SearchStatus::Searching
        }
    }

    /// Returns an owned copy of the host-facing state.
    pub fn snapshot(&self) -> SearchSnapshot<N> {
        SearchSnapshot {
            reference: self.reference.clone(),
            working: self.working.clone(),
            attacks_reference: self.attacks_reference,
            attacks_working: self.attacks_working,
            move_count: self.move_count,
            status: self.status(),
        }
    }

    pub fn reference(&self) -> &BoardState<N> {
        &self.reference
    }

    pub fn working(&self) -> &BoardState<N> {
        &self.working
    }

    pub fn attacks_reference(&self) -> AttackCount {
        self.attacks_reference
    }

    pub fn attacks_working(&self) -> AttackCount {
        self.attacks_working
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Returns the heuristic table of the working board.
    pub fn heuristic_table(&self) -> &HeuristicTable<N> {
        &self.table
    }

    /// Returns table cell `(0, 0)`, shown by hosts as the evaluation baseline.
    pub fn table_baseline(&self) -> AttackCount {
        self.table.baseline()
    }

    /// Returns the candidate moves in table scan order.
    pub fn current_candidates(&self) -> &[QueenMove] {
        &self.candidates
    }

    /// Returns the move the next step will apply, if any.
    pub fn current_chosen_move(&self) -> Option<QueenMove> {
        self.chosen
    }

    pub fn statistics(&self) -> &SearchStats {
        &self.stats
    }

    pub fn step_limit(&self) -> Option<u64> {
        self.step_limit
    }
}

impl<const N: usize, R> Debug for SearchController<N, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("reference", &self.reference)
            .field("working", &self.working)
            .field("attacks_working", &self.attacks_working)
            .field("move_count", &self.move_count)
            .field("candidates", &self.candidates.len())
            .field("chosen", &self.chosen)
            .field("step_limit", &self.step_limit)
            .finish()
    }
}
