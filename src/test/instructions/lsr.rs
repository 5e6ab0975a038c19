use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn shifts_right() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        8,
        make_word(opcodes::LSR, 2),
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 2);
}

#[test]
fn inserts_zeros_from_the_left() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        0x8000,
        make_word(opcodes::LSR, 15),
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 1);
}
