use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn taken_when_flag_set() {
    let processor = run_program(&[
        make_word(opcodes::CMP_IMMEDIATE, 0),
        0,
        make_word(opcodes::JPE, 0),
        6,
        make_word(opcodes::LDM, 0),
        1,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 0);
}

#[test]
fn skipped_when_flag_clear() {
    let processor = run_program(&[
        make_word(opcodes::CMP_IMMEDIATE, 0),
        1,
        make_word(opcodes::JPE, 0),
        6,
        make_word(opcodes::LDM, 0),
        1,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 1);
}
