use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn loads_at_base_plus_index() {
    let processor = run_program(&[
        make_word(opcodes::LDR, 0),
        2,
        make_word(opcodes::LDX, 0),
        5,
        make_word(opcodes::END, 0),
        0,
        0,
        77,
    ]);

    assert_eq!(processor.components().acc.value(), 77);
}

#[test]
fn zero_index_degenerates_to_direct() {
    let processor = run_program(&[
        make_word(opcodes::LDX, 0),
        4,
        make_word(opcodes::END, 0),
        0,
        31,
    ]);

    assert_eq!(processor.components().acc.value(), 31);
}
