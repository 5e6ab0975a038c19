use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn adds_immediate() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        40,
        make_word(opcodes::ADD_IMMEDIATE, 0),
        2,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 42);
}

#[test]
fn adds_from_memory() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        40,
        make_word(opcodes::ADD_DIRECT, 0),
        6,
        make_word(opcodes::END, 0),
        0,
        2,
    ]);

    assert_eq!(processor.components().acc.value(), 42);
}

#[test]
fn wraps_modulo_word() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        0xFFFF,
        make_word(opcodes::ADD_IMMEDIATE, 0),
        1,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 0);
}
