use day2::Report;

fn report(s: &str) -> Report {
    Report::try_from(s).unwrap()
}

#[test]
fn monotonic_small_steps_are_safe() {
    assert!(report("7 6 4 2 1").is_safe());
    assert!(report("1 3 6 7 9").is_safe());
    assert!(report("5").is_safe());
}

#[test]
fn direction_change_or_big_jump_is_unsafe() {
    assert!(!report("1 2 7 8 9").is_safe());
    assert!(!report("1 3 2 4 5").is_safe());
    assert!(!report("8 6 4 4 1").is_safe());
}

#[test]
fn dampener_removes_one_bad_level() {
    assert!(report("1 3 2 4 5").is_tolerantly_safe());
    assert!(report("8 6 4 4 1").is_tolerantly_safe());
    // Only dropping the first level works here.
    assert!(report("9 1 2 3 4").is_tolerantly_safe());
    assert!(!report("9 7 6 2 1").is_tolerantly_safe());
}

#[test]
fn non_numeric_level_is_rejected() {
    assert!(Report::try_from("1 2 x").is_err());
}
