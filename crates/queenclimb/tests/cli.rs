//! Command-line host tests, run against the built binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn queenclimb(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_queenclimb"))
        .args(args)
        .current_dir(std::env::temp_dir())
        .env("RUST_LOG", "error")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn queenclimb");

    let mut input = child.stdin.take().expect("Failed to get stdin");
    input.write_all(stdin.as_bytes()).unwrap();
    drop(input);

    let output = child.wait_with_output().expect("Failed to wait on queenclimb");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    output
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_json_run_ignores_rust_log() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_queenclimb"))
        .args(["run", "--json", "--seed", "3", "--rows", "0,0,0,0,0,0"])
        .current_dir(std::env::temp_dir())
        .env("RUST_LOG", "trace")
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn queenclimb");
    let output = child.wait_with_output().expect("Failed to wait on queenclimb");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON document");

    assert_eq!(report["stop_reason"], "solved");
    assert_eq!(report["snapshot"]["reference"], serde_json::json!([0, 0, 0, 0, 0, 0]));
    assert_eq!(report["attacking_pairs"], serde_json::json!([]));
    let rate = report["plateau_rate"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&rate));
}

#[test]
fn test_state_lists_attacking_pairs() {
    let output = queenclimb(&["step", "--count", "0", "--quiet", "--rows", "0,2,4,1,3,0"], "");
    let text = stdout(&output);

    assert!(text.contains("Attacking pairs: (0, 5)"), "{}", text);
    assert!(text.contains("Possible moves (H=1): (0, 5) (5, 5)"), "{}", text);
}

#[test]
fn test_solved_state_has_no_attacking_pairs() {
    let output = queenclimb(&["step", "--count", "1", "--quiet", "--rows", "1,3,5,0,2,4"], "");
    let text = stdout(&output);

    assert!(text.contains("Attacking pairs: none"), "{}", text);
    assert!(text.contains("Chosen move: none"), "{}", text);
}

#[test]
fn test_interactive_limit_command() {
    let output = queenclimb(
        &["interactive", "--quiet", "--seed", "8", "--rows", "0,2,4,1,3,0"],
        "limit\nlimit 5\nrun\nlimit 0\nlimit none\nquit\n",
    );
    let text = stdout(&output);

    assert!(text.contains("Step limit: 10000"), "{}", text);
    assert!(text.contains("Step limit: 5"), "{}", text);
    assert!(text.contains("Stopped: step_limit_reached after 5 steps"), "{}", text);
    assert!(text.contains("step limit must be a positive number"), "{}", text);
    assert!(text.contains("Step limit: none"), "{}", text);
}
