use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn loads_from_memory() {
    let processor = run_program(&[
        make_word(opcodes::LDD, 0),
        4,
        make_word(opcodes::END, 0),
        0,
        42,
    ]);

    assert_eq!(processor.components().acc.value(), 42);
}

#[test]
fn unwritten_cells_read_as_zero() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        7,
        make_word(opcodes::LDD, 0),
        1000,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 0);
}
