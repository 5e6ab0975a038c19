use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn ands_immediate() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        0b1100,
        make_word(opcodes::AND_IMMEDIATE, 0),
        0b1010,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 0b1000);
}

#[test]
fn ands_from_memory() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        0xFF0F,
        make_word(opcodes::AND_DIRECT, 0),
        6,
        make_word(opcodes::END, 0),
        0,
        0x0FF0,
    ]);

    assert_eq!(processor.components().acc.value(), 0x0F00);
}
