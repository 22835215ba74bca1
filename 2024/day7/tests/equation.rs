use day7::{Equation, Operator};

const PLUS_MUL: &[Operator] = &[Operator::Plus, Operator::Multiply];
const ALL_OPS: &[Operator] = &[Operator::Plus, Operator::Multiply, Operator::Concatenation];

fn equation(s: &str) -> Equation {
    Equation::try_from(s).unwrap()
}

#[test]
fn operators_apply_left_to_right() {
    assert!(equation("3267: 81 40 27").is_possible(PLUS_MUL));
    assert!(equation("292: 11 6 16 20").is_possible(PLUS_MUL));
    assert!(!equation("83: 17 5").is_possible(PLUS_MUL));
}

#[test]
fn concatenation_joins_digits() {
    assert!(!equation("156: 15 6").is_possible(PLUS_MUL));
    assert!(equation("156: 15 6").is_possible(ALL_OPS));
    assert!(equation("7290: 6 8 6 15").is_possible(ALL_OPS));
    assert!(equation("192: 17 8 14").is_possible(ALL_OPS));
    assert!(!equation("161011: 16 10 13").is_possible(ALL_OPS));
}

#[test]
fn zero_oprands() {
    assert!(equation("0: 5 0").is_possible(PLUS_MUL));
    assert!(equation("5: 5 0").is_possible(PLUS_MUL));
    assert!(equation("50: 5 0").is_possible(ALL_OPS));
    assert!(!equation("7: 5 0").is_possible(ALL_OPS));
}

#[test]
fn malformed_equations_are_rejected() {
    assert!(Equation::try_from("190 10 19").is_err());
    assert!(Equation::try_from("x: 10 19").is_err());
    assert!(Equation::try_from("190: 10 y").is_err());
}
