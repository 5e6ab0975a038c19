use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn stores_through_a_pointer() {
    // Cell 5 points at cell 7.
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        9,
        make_word(opcodes::STI, 0),
        5,
        make_word(opcodes::END, 0),
        7,
    ]);

    assert_eq!(processor.memory(7), 9);
    assert_eq!(processor.memory(5), 7);
}
