use crate::test::run_program;
use crate::{make_word, opcodes, Error, Processor, RegisterIndex};

#[test]
fn moves_acc_into_indexed_register() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        7,
        make_word(opcodes::MOV, RegisterIndex::IX as u8),
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.components().ix.value(), 7);
    assert_eq!(processor.components().acc.value(), 7);
}

#[test]
fn invalid_register_index_is_reported() {
    let mut processor = Processor::new();
    processor.load_program(&[
        make_word(opcodes::MOV, 9),
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.run_to_halt(100), Err(Error::InvalidOperand(9)));
}
