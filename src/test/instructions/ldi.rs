use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn loads_through_a_pointer() {
    // Cell 4 holds a pointer to cell 6.
    let processor = run_program(&[
        make_word(opcodes::LDI, 0),
        4,
        make_word(opcodes::END, 0),
        0,
        6,
        0,
        99,
    ]);

    assert_eq!(processor.components().acc.value(), 99);
}
