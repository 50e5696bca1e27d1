//! CLI integration tests
//!
//! These run the real binary and check what it prints.

use assert_cmd::Command;
use predicates::prelude::*;

fn polyburst() -> Command {
    Command::cargo_bin("polyburst").unwrap()
}

#[test]
fn test_help_lists_commands() {
    polyburst()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("fan"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_simulate_with_seed() {
    polyburst()
        .args([
            "simulate",
            "--width",
            "800",
            "--height",
            "600",
            "--click",
            "400,300",
            "--frames",
            "20",
            "--report-every",
            "10",
            "--seed",
            "42",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Simulation ==="))
        .stdout(predicate::str::contains("Frames run:      20"))
        .stdout(predicate::str::contains("Peak live:       5"));
}

#[test]
fn test_simulate_is_reproducible() {
    let run = || {
        polyburst()
            .args(["simulate", "--frames", "30", "--seed", "9", "-c", "-20,50"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_simulate_rejects_bad_click() {
    polyburst()
        .args(["simulate", "--click", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected X,Y"));
}

#[test]
fn test_simulate_rejects_zero_dt() {
    polyburst()
        .args(["simulate", "--dt", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Frame time must be a positive"));
}

#[test]
fn test_fan_prints_every_vertex() {
    polyburst()
        .args(["fan", "--points", "6", "--seed", "1", "--steps", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("State:       Alive"))
        .stdout(predicate::str::contains("=== Fan (5 triangles) ==="))
        .stdout(predicate::str::contains("hub"))
        .stdout(predicate::str::contains("#ffffff"));
}

#[test]
fn test_fan_rejects_too_few_points() {
    polyburst()
        .args(["fan", "--points", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 3 points"));
}

#[test]
fn test_completions() {
    polyburst()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("polyburst"));
}
