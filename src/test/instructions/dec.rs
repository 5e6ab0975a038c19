use crate::test::run_program;
use crate::{make_word, opcodes, RegisterIndex};

#[test]
fn decrements_acc() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        43,
        make_word(opcodes::DEC, RegisterIndex::ACC as u8),
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 42);
}

#[test]
fn wraps_below_zero() {
    let processor = run_program(&[
        make_word(opcodes::DEC, RegisterIndex::ACC as u8),
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 0xFFFF);
}
