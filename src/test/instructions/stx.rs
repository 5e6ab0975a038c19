use crate::test::run_program;
use crate::{make_word, opcodes};

#[test]
fn stores_at_base_plus_index() {
    let processor = run_program(&[
        make_word(opcodes::LDR, 0),
        3,
        make_word(opcodes::LDM, 0),
        8,
        make_word(opcodes::STX, 0),
        10,
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.memory(13), 8);
    assert_eq!(processor.memory(10), 0);
}
