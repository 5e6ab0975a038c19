//! Micro-stepped simulator for a 16-bit accumulator machine in the style of
//! the Cambridge 9618 teaching architecture.
//!
//! The crate models every part of the datapath as an observable component:
//! word-sized registers, a RAM with split address and data ports, an ALU with
//! a comparison flag, byte-queue I/O ports, and display-only buses. The
//! control unit walks each instruction as an explicit sequence of register
//! transfer steps, so a caller can advance execution one micro-operation at a
//! time and redraw the whole machine between steps.
//!
//! The usual entry point is [`Processor`]: load a program with
//! [`Processor::load_program`], then call [`Processor::step`] until it
//! reports [`TickResult::Halted`], inspecting [`Processor::snapshot`] along
//! the way.

pub mod constants;

mod alu;
mod bus;
mod control;
mod enums;
mod error;
mod format;
mod instructions;
mod io;
mod memory;
mod processor;
mod register;
mod snapshot;

pub use crate::alu::{Alu, CmpFlag};
pub use crate::bus::Bus;
pub use crate::control::{Components, ControlUnit, TickResult};
pub use crate::enums::{
    register_index, AddressingMode, ComponentName, ControlSignal, CyclePhase, DisplayMode,
    ParseEnumError, RegisterIndex,
};
pub use crate::error::Error;
pub use crate::format::formatted_value;
pub use crate::instructions::{
    decode_steps, definitions_for_mnemonic, direct_addressing_steps, fetch_steps,
    indexed_addressing_steps, indirect_addressing_steps, instruction, long_operand_fetch_steps,
    make_word, opcodes, Destination, InstructionDefinition, RtnStep, INSTRUCTION_SET,
};
pub use crate::io::IoPort;
pub use crate::memory::{Ram, RamAddress};
pub use crate::processor::{Processor, StepObserver};
pub use crate::register::Register;
pub use crate::snapshot::{
    AluView, BusView, CpuSnapshot, CuView, FlagView, MemoryView, PortView, RegisterView,
};

/// Machine word. Every register, memory cell, and emitted value is one of
/// these; wrap-around arithmetic comes with the type.
pub type Word = u16;
