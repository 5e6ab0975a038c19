use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn xors_immediate() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        0b1100,
        make_word(opcodes::XOR_IMMEDIATE, 0),
        0b1010,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 0b0110);
}

#[test]
fn xor_with_itself_clears_acc() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        0xABCD,
        make_word(opcodes::XOR_DIRECT, 0),
        6,
        make_word(opcodes::END, 0),
        0,
        0xABCD,
    ]);

    assert_eq!(processor.components().acc.value(), 0);
}
