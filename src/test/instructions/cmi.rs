use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn compares_through_a_pointer() {
    // Cell 6 points at cell 7, which holds the compared value.
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        42,
        make_word(opcodes::CMI, 0),
        6,
        make_word(opcodes::END, 0),
        0,
        7,
        42,
    ]);

    assert!(processor.components().alu.flag().read());
}

#[test]
fn pointer_mismatch_clears_the_flag() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        42,
        make_word(opcodes::CMI, 0),
        6,
        make_word(opcodes::END, 0),
        0,
        7,
        41,
    ]);

    assert!(!processor.components().alu.flag().read());
}
