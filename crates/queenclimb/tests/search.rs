//! End-to-end searches through the public facade.

use queenclimb::prelude::*;
use queenclimb::{count_attacks, solve, QueenClimbError, DEFAULT_SIZE};
use queenclimb_test::{boards, rng};

#[test]
fn test_solve_from_stacked_board() {
    let config = SearchConfig::new()
        .with_random_seed(5)
        .with_initial_rows(vec![0; DEFAULT_SIZE])
        .with_step_limit(10_000);

    let outcome = solve(&config).unwrap();

    assert_eq!(outcome.stop_reason, StopReason::Solved);
    assert_eq!(outcome.snapshot.reference, boards::stacked());
    assert_eq!(outcome.snapshot.attacks_reference, AttackCount::of(15));
    assert_eq!(count_attacks(&outcome.snapshot.working), AttackCount::ZERO);
}

#[test]
fn test_solve_rejects_bad_rows() {
    let config = SearchConfig::new().with_initial_rows(vec![0, 0, 7, 0, 0, 0]);
    assert!(matches!(solve(&config), Err(QueenClimbError::Config(_))));
}

#[test]
fn test_solve_is_reproducible() {
    let config = SearchConfig::new().with_random_seed(99).with_step_limit(500);
    assert_eq!(solve(&config).unwrap(), solve(&config).unwrap());
}

#[test]
fn test_host_cycle_step_run_reset() {
    let mut controller: SearchController<6, _> =
        SearchController::from_board(boards::stacked(), rng::seeded(31)).with_step_limit(Some(5_000));

    let first = controller.step();
    assert_eq!(first.move_count, 1);
    assert!(first.attacks_working < first.attacks_reference);

    let outcome = controller.run_to_completion();
    assert_eq!(outcome.stop_reason, StopReason::Solved);
    assert_eq!(outcome.snapshot.move_count, outcome.steps_taken + 1);

    let after_reset = controller.reset();
    assert_eq!(after_reset.move_count, 0);
    assert_eq!(after_reset.reference, after_reset.working);
    assert_eq!(controller.statistics().resets, 1);
}

#[test]
fn test_trapped_board_reports_step_limit() {
    let config = SearchConfig::new()
        .with_random_seed(1)
        .with_initial_rows(boards::plateau_trap().rows().to_vec())
        .with_step_limit(40);

    let outcome = solve(&config).unwrap();

    assert_eq!(outcome.stop_reason, StopReason::StepLimitReached);
    assert_eq!(outcome.steps_taken, 40);
    assert_eq!(outcome.snapshot.status, SearchStatus::Searching);
    assert_eq!(outcome.snapshot.attacks_working, AttackCount::of(1));
}

#[test]
fn test_snapshot_serializes_boards_as_row_lists() {
    let controller: SearchController<6, _> =
        SearchController::from_board(boards::solved(), rng::seeded(2));

    let json = serde_json::to_value(controller.snapshot()).unwrap();

    assert_eq!(json["reference"], serde_json::json!([1, 3, 5, 0, 2, 4]));
    assert_eq!(json["attacks_working"], serde_json::json!(0));
    assert_eq!(json["status"], serde_json::json!("solved"));
}
