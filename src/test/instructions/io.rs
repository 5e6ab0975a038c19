use crate::test::{run_program, run_with_input};
use crate::{make_word, opcodes, Processor, TickResult};

#[test]
fn in_reads_the_next_byte() {
    let processor = run_with_input(
        &[make_word(opcodes::IN, 0), make_word(opcodes::END, 0)],
        &[0x41],
    );

    assert_eq!(processor.components().acc.value(), 0x41);
}

#[test]
fn out_writes_the_low_byte() {
    let processor = run_program(&[
        make_word(opcodes::LDM, 0),
        0x1234,
        make_word(opcodes::OUT, 0),
        make_word(opcodes::END, 0),
    ]);

    assert_eq!(processor.output(), vec![0x34]);
}

#[test]
fn in_on_an_empty_queue_pauses_without_touching_acc() {
    let mut processor = Processor::new();
    processor.load_program(&[
        make_word(opcodes::LDM, 0),
        99,
        make_word(opcodes::IN, 0),
        make_word(opcodes::END, 0),
    ]);

    // Step up to the paused IN.
    let mut paused = false;
    for _ in 0..100 {
        if processor.step().unwrap() == TickResult::AwaitingInput {
            paused = true;
            break;
        }
    }
    assert!(paused);
    assert!(processor.components().io_in.awaiting());
    assert_eq!(processor.components().acc.value(), 99);

    // Feeding a byte lets the same step complete.
    processor.feed_input(&[7]);
    processor.run_to_halt(100).unwrap();
    assert_eq!(processor.components().acc.value(), 7);
}

#[test]
fn io_round_trip_echoes_bytes() {
    let processor = run_with_input(
        &[
            make_word(opcodes::IN, 0),
            make_word(opcodes::OUT, 0),
            make_word(opcodes::IN, 0),
            make_word(opcodes::OUT, 0),
            make_word(opcodes::END, 0),
        ],
        b"Hi",
    );

    assert_eq!(processor.output(), b"Hi".to_vec());
}
