use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn loads_immediate_into_ix() {
    let processor = run_program(&[
        make_word(opcodes::LDR, 0),
        9,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().ix.value(), 9);
    assert_eq!(processor.components().acc.value(), 0);
}
