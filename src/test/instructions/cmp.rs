use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn equal_values_set_the_flag() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        7,
        make_word(opcodes::CMP_IMMEDIATE, 0),
        7,
        make_word(opcodes::END, 0),
    ]);

    assert!(processor.components().alu.flag().read());
    // Comparing never clobbers the accumulator.
    assert_eq!(processor.components().acc.value(), 7);
}

#[test]
fn unequal_values_clear_the_flag() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        7,
        make_word(opcodes::CMP_IMMEDIATE, 0),
        8,
        make_word(opcodes::END, 0),
    ]);

    assert!(!processor.components().alu.flag().read());
}

#[test]
fn compares_against_memory() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        42,
        make_word(opcodes::CMP_DIRECT, 0),
        6,
        make_word(opcodes::END, 0),
        0,
        42,
    ]);

    assert!(processor.components().alu.flag().read());
}
