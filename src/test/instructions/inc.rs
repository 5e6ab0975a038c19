use crate::test::run_program;
use crate::{make_word, opcodes, RegisterIndex};

#[test]
fn increments_acc() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        41,
        make_word(opcodes::INC, RegisterIndex::ACC as u8),
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 42);
}

#[test]
fn increments_ix_and_wraps() {
    let processor = run_program(&[
        make_word(opcodes::LDR, 0),
        0xFFFF,
        make_word(opcodes::INC, RegisterIndex::IX as u8),
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().ix.value(), 0);
}
