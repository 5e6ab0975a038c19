use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn subtracts_immediate() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        44,
        make_word(opcodes::SUB_IMMEDIATE, 0),
        2,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 42);
}

#[test]
fn subtracts_from_memory() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        44,
        make_word(opcodes::SUB_DIRECT, 0),
        6,
        make_word(opcodes::END, 0),
        0,
        2,
    ]);

    assert_eq!(processor.components().acc.value(), 42);
}

#[test]
fn wraps_below_zero() {
    let processor = run_program(&[
        make_word(opcodes::SUB_IMMEDIATE, 0),
        1,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 0xFFFF);
}
