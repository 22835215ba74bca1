use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt};

#[test]
fn every_day_prints_both_parts() {
    let mut cmd = Command::cargo_bin("run_all").unwrap();
    cmd.arg("--inputs-dir").arg("tests/inputs");

    cmd.assert()
        .success()
        .stdout(str::contains("Day 1\n====================\nPart 1: 11\nPart 2: 31"))
        .stdout(str::contains("Part 1: 2\nPart 2: 4"))
        .stdout(str::contains("Part 1: 161\nPart 2: 48"))
        .stdout(str::contains("Part 1: 18\nPart 2: 9"))
        .stdout(str::contains("Part 1: 143\nPart 2: 123"))
        .stdout(str::contains("Day 6\n====================\nPart 1: 41\nPart 2: 6"))
        .stdout(str::contains("Part 1: 3749\nPart 2: 11387"))
        .stdout(str::contains("Part 1: 14\nPart 2: 34"))
        .stdout(str::contains("Part 1: 1928\nPart 2: 2858"));
}

#[test]
fn failing_day_does_not_stop_the_others() {
    let mut cmd = Command::cargo_bin("run_all").unwrap();
    cmd.arg("--inputs-dir").arg("tests/broken_inputs");

    cmd.assert()
        .success()
        .stdout(str::contains("Part 1: 11\nPart 2: 31"))
        .stdout(str::contains("No input found for Day 2"))
        .stdout(str::contains("Error running Day 6:"))
        .stdout(str::contains("There's no guard in given laboratory"))
        .stdout(str::contains("No input found for Day 9"));
}

#[test]
fn single_day_can_be_selected() {
    let mut cmd = Command::cargo_bin("run_all").unwrap();
    cmd.arg("--inputs-dir").arg("tests/inputs").arg("--day").arg("9");

    cmd.assert()
        .success()
        .stdout(str::contains("Day 9"))
        .stdout(str::contains("Part 2: 2858"))
        .stdout(str::contains("Day 1\n").not());
}

#[test]
fn unsolved_day_is_reported() {
    let mut cmd = Command::cargo_bin("run_all").unwrap();
    cmd.arg("--inputs-dir").arg("tests/inputs").arg("--day").arg("12");

    cmd.assert()
        .success()
        .stdout(str::contains("No solution found for Day 12"));
}

#[test]
fn days_without_solution_are_listed() {
    let mut cmd = Command::cargo_bin("run_all").unwrap();
    cmd.arg("--inputs-dir").arg("tests/inputs");

    cmd.assert()
        .success()
        .stdout(str::contains("Day 10\n====================\nNo solution found for Day 10"))
        .stdout(str::contains("No solution found for Day 25"))
        .stdout(str::contains("No solution found for Day 9\n").not());
}
