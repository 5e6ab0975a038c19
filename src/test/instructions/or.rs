use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn ors_immediate() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        0b1100,
        make_word(opcodes::OR_IMMEDIATE, 0),
        0b1010,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 0b1110);
}

#[test]
fn ors_from_memory() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        0xF000,
        make_word(opcodes::OR_DIRECT, 0),
        6,
        make_word(opcodes::END, 0),
        0,
        0x000F,
    ]);

    assert_eq!(processor.components().acc.value(), 0xF00F);
}
