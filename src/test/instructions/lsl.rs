use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn shifts_left() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        1,
        make_word(opcodes::LSL, 3),
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 8);
}

#[test]
fn shifted_out_bits_are_lost() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        0x8001,
        make_word(opcodes::LSL, 1),
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().acc.value(), 2);
}

#[test]
fn count_reduces_modulo_word_size() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        1,
        make_word(opcodes::LSL, 20),
        make_word(opcodes::END, 0),
    ]);

    // 20 mod 16 = 4
    assert_eq!(processor.components().acc.value(), 16);
}
