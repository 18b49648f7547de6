//! Builds search controllers from configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;

use queenclimb_config::SearchConfig;
use queenclimb_core::{BoardState, QueenClimbError, Result};

use crate::controller::SearchController;

impl<const N: usize> SearchController<N, StdRng> {
    /// Creates a controller from a [`SearchConfig`].
    ///
    /// `random_seed` seeds the `StdRng` (OS entropy when absent),
    /// `initial_rows` fixes the reference board (random when absent) and
    /// `step_limit` caps each run.
    ///
    /// # Errors
    ///
    /// Returns `Config` when `initial_rows` does not describe an `N`-column
    /// board.
    ///
    /// # Example
    ///
    /// ```
    /// use queenclimb_config::SearchConfig;
    /// use queenclimb_solver::SearchController;
    ///
    /// let config = SearchConfig::new()
    ///     .with_random_seed(42)
    ///     .with_initial_rows(vec![0, 0, 0, 0, 0, 0])
    ///     .with_step_limit(100);
    ///
    /// let controller = SearchController::<6>::from_config(&config).unwrap();
    /// assert_eq!(controller.reference().rows(), &[0; 6]);
    /// assert_eq!(controller.step_limit(), Some(100));
    /// ```
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        let mut rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let reference = match &config.initial_rows {
            Some(rows) => BoardState::new(rows)
                .map_err(|e| QueenClimbError::Config(format!("initial_rows: {}", e)))?,
            None => BoardState::random(&mut rng),
        };

        Ok(Self::from_board(reference, rng).with_step_limit(config.step_limit))
    }
}
