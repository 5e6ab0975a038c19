use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn jumps_over_code() {
    let processor = run_program(&[
        make_word(opcodes::JMP, 0),
        4,
        make_word(opcodes::LDM, 0),
        1,
        make_word(opcodes::END, 0),
    ]);

    // The LDM was skipped.
    assert_eq!(processor.components().acc.value(), 0);
}
