use day3::{Instruction, Memory};

#[test]
fn only_well_formed_muls_count() {
    let memory =
        Memory::new("xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))");

    assert_eq!(memory.mul_sum(), 161);
}

#[test]
fn operands_have_at_most_three_digits() {
    let memory = Memory::new("mul(1234,2)mul(123,2)mul( 1,2)");

    assert_eq!(
        memory.instructions().collect::<Vec<_>>(),
        vec![Instruction::Mul(123, 2)]
    );
}

#[test]
fn dont_state_spans_lines() {
    let memory = Memory::new("mul(2,3)don't()\nmul(4,5)\ndo()mul(1,1)");

    assert_eq!(memory.mul_sum(), 27);
    assert_eq!(memory.mul_sum_enable(), 7);
}
