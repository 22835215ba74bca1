use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day6_part2").unwrap();
    cmd.arg("tests/example.txt");

    cmd.assert().success().stdout(str::contains("Part 2: 6"));
}

#[test]
fn part2_accepts_truncated_visits_criterion() {
    let mut cmd = Command::cargo_bin("day6_part2").unwrap();
    cmd.arg("tests/example.txt")
        .arg("--criterion")
        .arg("truncated-visits");

    cmd.assert().success().stdout(str::contains("Part 2: 40"));
}
