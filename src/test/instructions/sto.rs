use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn stores_acc_into_memory() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        5,
        make_word(opcodes::STO, 0),
        100,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.memory(100), 5);
    assert_eq!(processor.components().acc.value(), 5);
}

#[test]
fn overwrites_previous_contents() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        1,
        make_word(opcodes::STO, 0),
        50,
        make_word(opcodes::LDM, 0),
        2,
        make_word(opcodes::STO, 0),
        50,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.memory(50), 2);
}
