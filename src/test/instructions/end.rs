use crate::{make_word, opcodes, CyclePhase, Processor, TickResult};

#[test]
fn halts_in_the_execute_phase() {
    let mut processor = Processor::new();
    processor.load_program(&[make_word(opcodes::END, 0)]);
    processor.run_to_halt(100).unwrap();

    assert_eq!(processor.control_unit().phase(), CyclePhase::Execute);
    assert_eq!(processor.control_unit().sequence().len(), 0);
}

#[test]
fn further_steps_are_no_ops() {
    let mut processor = Processor::new();
    processor.load_program(&[make_word(opcodes::END, 0)]);
    processor.run_to_halt(100).unwrap();

    let before = processor.snapshot();
    assert_eq!(processor.step().unwrap(), TickResult::Halted);
    assert_eq!(processor.snapshot(), before);
}
