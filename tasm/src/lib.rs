//! Two-pass assembler for the [tcpu](../tcpu/index.html) teaching processor.
//!
//! The crate offers two front doors. [`assemble`] turns a source string
//! into a [`timage::Program`] plus a [`SourceMap`] in one call. [`Assembler`]
//! exposes the same pipeline as a resumable stepper: every call to
//! [`Assembler::step`] performs one micro-step — one line trimmed, one line
//! scanned, one record emitted — and returns a [`Snapshot`] from which a
//! front-end can redraw the whole assembly view, so a learner can watch the
//! two passes happen.
//!
//! Individual lines are parsed with a [pest] grammar; the line-shape and
//! operand errors it cannot express are reported through [`Error`].
//!
//! # Assembly dialect
//!
//! One statement per line. Comments start with `;` and run to the end of
//! the line; blank and comment-only lines are discarded during trimming.
//! Labels are declared as `NAME:` and are normalised to upper case. A label
//! followed by an immediate literal declares a variable; variables are
//! placed after the last instruction word, so every program starts at
//! address 0.
//!
//! Immediate literals:
//!
//! Prefix | Base | Example
//! -------|------|--------
//! `#`    | 10   | `#42`
//! `B`    | 2    | `B101010`
//! `&`    | 16   | `&2A`
//!
//! An operand is an immediate literal, a declared label, or one of the six
//! register names `ACC`, `IX`, `PC`, `MAR`, `MDR`, `CIR` (which resolve to
//! their register index).
//!
//! Mnemonic reference:
//!
//! Mnemonic | Addressing          | Effect
//! ---------|---------------------|--------------------------------------
//! `LDM`    | immediate           | ACC <- value
//! `LDD`    | direct              | ACC <- memory[address]
//! `LDI`    | indirect            | ACC <- memory[memory[address]]
//! `LDX`    | indexed             | ACC <- memory[address + IX]
//! `LDR`    | immediate           | IX <- value
//! `MOV`    | register            | register <- ACC
//! `STO`    | direct              | memory[address] <- ACC
//! `STI`    | indirect            | memory[memory[address]] <- ACC
//! `STX`    | indexed             | memory[address + IX] <- ACC
//! `ADD`    | direct or immediate | ACC <- ACC + value
//! `SUB`    | direct or immediate | ACC <- ACC - value
//! `AND`    | direct or immediate | ACC <- ACC AND value
//! `OR`     | direct or immediate | ACC <- ACC OR value
//! `XOR`    | direct or immediate | ACC <- ACC XOR value
//! `INC`    | register            | register <- register + 1
//! `DEC`    | register            | register <- register - 1
//! `JMP`    | immediate           | PC <- address
//! `CMP`    | direct or immediate | E flag <- (ACC == value)
//! `CMI`    | indirect            | E flag <- (ACC == memory[memory[address]])
//! `JPE`    | immediate           | if E flag set: PC <- address
//! `JPN`    | immediate           | if E flag clear: PC <- address
//! `IN`     | none                | ACC <- next input byte
//! `OUT`    | none                | output <- low byte of ACC
//! `LSL`    | immediate           | ACC <- ACC << count
//! `LSR`    | immediate           | ACC <- ACC >> count
//! `END`    | none                | halt
//!
//! `ADD`, `SUB`, `AND`, `OR`, `XOR` and `CMP` exist in both an immediate
//! and a direct form under one mnemonic; an operand starting with `#`, `B`
//! or `&` selects the immediate form, anything else the direct one.
//!
//! Every program must contain an `END` instruction.
//!
//! [pest]: https://docs.rs/pest/

mod emit;
mod error;
mod labels;
mod parser;
mod records;
mod snapshot;
mod source_map;
mod stepper;


pub use crate::error::Error;
pub use crate::records::ParsingRecord;
pub use crate::snapshot::Snapshot;
pub use crate::source_map::{SourceMap, SourceMapItem};
pub use crate::stepper::{Assembler, Phase};

use timage::Program;

pub type Result<T> = std::result::Result<T, Error>;

/// Assembles a source program in one call.
///
/// Returns the program image and a source map associating each emitted
/// word's base address with its trimmed source line.
pub fn assemble(source: &str) -> Result<(Program, SourceMap)> {
    let mut assembler = Assembler::new(source);
    let limit = assembler.step_limit();
    let words = assembler.run_to_completion(limit)?;
    Ok((Program::from_words(words), assembler.source_map().clone()))
}
