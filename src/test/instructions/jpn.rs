use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn taken_when_flag_clear() {
    let processor = run_program(&[
        make_word(opcodes::CMP_IMMEDIATE, 0),
        1,
        make_word(opcodes::JPN, 0),
        6,
        make_word(opcodes::LDM, 0),
        1,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 0);
}

#[test]
fn counting_loop_runs_to_the_limit() {
    // ACC += 1 until ACC == 3.
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        0,
        make_word(opcodes::ADD_IMMEDIATE, 0),
        1,
        make_word(opcodes::CMP_IMMEDIATE, 0),
        3,
        make_word(opcodes::JPN, 0),
        2,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 3);
    assert!(processor.components().alu.flag().read());
}
