//! Search statistics.
//!
//! Counters kept by the controller since the last reset.

use std::time::{Duration, Instant};

use queenclimb_core::AttackCount;

/// Search-level statistics.
///
/// # Example
///
/// ```
/// use queenclimb_core::AttackCount;
/// use queenclimb_solver::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_step(AttackCount::of(5), AttackCount::of(3));
/// stats.record_step(AttackCount::of(3), AttackCount::of(3));
///
/// assert_eq!(stats.steps, 2);
/// assert_eq!(stats.improving_steps, 1);
/// assert_eq!(stats.plateau_steps, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    /// Moves applied since the last reset.
    pub steps: u64,
    /// Steps that strictly lowered the attack count.
    pub improving_steps: u64,
    /// Steps that kept the attack count (lateral moves).
    pub plateau_steps: u64,
    /// Heuristic tables built since the last reset.
    pub table_evaluations: u64,
    /// Resets over the controller's lifetime; never cleared.
    pub resets: u64,
}

impl SearchStats {
    /// Marks the start of a search session.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since the session started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records an applied move given the attack counts around it.
    pub fn record_step(&mut self, before: AttackCount, after: AttackCount) {
        self.steps += 1;
        if after < before {
            self.improving_steps += 1;
        } else {
            self.plateau_steps += 1;
        }
    }

    /// Records one heuristic table build.
    pub fn record_evaluation(&mut self) {
        self.table_evaluations += 1;
    }

    /// Records a reset and clears the per-session counters.
    pub fn record_reset(&mut self) {
        let resets = self.resets + 1;
        *self = SearchStats {
            resets,
            ..SearchStats::default()
        };
        self.start();
    }

    /// Returns the share of plateau steps among all steps.
    pub fn plateau_rate(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.plateau_steps as f64 / self.steps as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plateau_rate() {
        let mut stats = SearchStats::default();
        assert_eq!(stats.plateau_rate(), 0.0);

        stats.record_step(AttackCount::of(4), AttackCount::of(2));
        stats.record_step(AttackCount::of(2), AttackCount::of(2));
        stats.record_step(AttackCount::of(2), AttackCount::of(2));
        stats.record_step(AttackCount::of(2), AttackCount::of(1));
        assert_eq!(stats.plateau_rate(), 0.5);
    }

    #[test]
    fn test_reset_keeps_only_reset_count() {
        let mut stats = SearchStats::default();
        stats.record_step(AttackCount::of(3), AttackCount::of(3));
        stats.record_evaluation();
        stats.record_reset();

        assert_eq!(stats.steps, 0);
        assert_eq!(stats.plateau_rate(), 0.0);
        assert_eq!(stats.table_evaluations, 0);
        assert_eq!(stats.resets, 1);
    }
}
