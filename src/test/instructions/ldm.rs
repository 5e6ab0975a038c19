use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn loads_immediate_into_acc() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        5,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 5);
}

#[test]
fn loads_full_word_values() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        0xFFFF,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 0xFFFF);
}
