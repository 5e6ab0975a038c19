use crate::constants;
use crate::enums::{AddressingMode, ComponentName, ControlSignal};
use crate::Word;
use std::fmt;

/// Instruction set of the accumulator machine.
///
/// Instruction word layout:
///
/// | Bits 15-8 | Bits 7-0 |
/// |-----------|----------|
/// | opcode    | operand  |
///
/// Short-operand instructions carry their operand in the low byte. A
/// long-operand instruction stores zero there and takes the whole next
/// memory word as its operand instead, fetched by the control unit before
/// the execute phase begins.
pub mod opcodes {
    pub const LDM: u8 = 0;
    pub const LDD: u8 = 1;
    pub const LDI: u8 = 2;
    pub const LDX: u8 = 3;
    pub const LDR: u8 = 4;
    pub const MOV: u8 = 5;
    pub const STO: u8 = 6;
    pub const ADD_DIRECT: u8 = 7;
    pub const ADD_IMMEDIATE: u8 = 8;
    pub const SUB_DIRECT: u8 = 9;
    pub const SUB_IMMEDIATE: u8 = 10;
    pub const INC: u8 = 11;
    pub const DEC: u8 = 12;
    pub const JMP: u8 = 13;
    pub const CMP_DIRECT: u8 = 14;
    pub const CMP_IMMEDIATE: u8 = 15;
    pub const CMI: u8 = 16;
    pub const JPE: u8 = 17;
    pub const JPN: u8 = 18;
    pub const IN: u8 = 19;
    pub const OUT: u8 = 20;
    pub const END: u8 = 21;
    pub const AND_IMMEDIATE: u8 = 22;
    pub const AND_DIRECT: u8 = 23;
    pub const XOR_IMMEDIATE: u8 = 24;
    pub const XOR_DIRECT: u8 = 25;
    pub const OR_IMMEDIATE: u8 = 26;
    pub const OR_DIRECT: u8 = 27;
    pub const LSL: u8 = 28;
    pub const LSR: u8 = 29;
    pub const STI: u8 = 30;
    pub const STX: u8 = 31;

    pub const COUNT: usize = 32;
}

/// Where an RTN step delivers (or, for register operations, finds) its value.
///
/// Most steps name a concrete component. MOV, INC and DEC instead resolve
/// their target at execution time from the register index carried in the
/// instruction's operand byte; that late binding is a distinct variant so a
/// handler cannot forget to perform it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Destination {
    Component(ComponentName),
    OperandRegister,
}

/// One micro-operation of the control unit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RtnStep {
    /// `destination <- source` over the inner data bus.
    Transfer {
        source: ComponentName,
        destination: Destination,
    },
    /// A transfer that only happens when the comparison flag matches
    /// `expected`; the step is consumed either way.
    ConditionalTransfer {
        source: ComponentName,
        destination: Destination,
        expected: bool,
    },
    /// One half of a memory transaction: the address phase copies MAR into
    /// the RAM address port, the data phase moves a word between MDR and the
    /// addressed cell in the direction of `control`.
    MemoryAccess { is_address: bool, control: ControlSignal },
    /// Feed the accumulator and `source` into the ALU and compute under
    /// `control`.
    AluOperation {
        source: ComponentName,
        control: ControlSignal,
    },
    /// Increment or decrement a register, by 1 or by the value of `source`.
    RegOperation {
        destination: Destination,
        control: ControlSignal,
        source: Option<ComponentName>,
    },
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Destination::Component(name) => write!(f, "{}", name),
            Destination::OperandRegister => f.write_str("reg[operand]"),
        }
    }
}

impl fmt::Display for RtnStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RtnStep::Transfer {
                source,
                destination,
            } => write!(f, "{} <- {}", destination, source),
            RtnStep::ConditionalTransfer {
                source,
                destination,
                expected,
            } => write!(
                f,
                "{} <- {} (if E {})",
                destination,
                source,
                if *expected { "set" } else { "clear" }
            ),
            RtnStep::MemoryAccess { is_address: true, .. } => {
                write!(f, "{} <- {}", ComponentName::RamAddress, ComponentName::MAR)
            }
            RtnStep::MemoryAccess { control, .. } => {
                if *control == ControlSignal::WRITE {
                    write!(f, "{} <- {}", ComponentName::RamData, ComponentName::MDR)
                } else {
                    write!(f, "{} <- {}", ComponentName::MDR, ComponentName::RamData)
                }
            }
            RtnStep::AluOperation { source, control } => write!(
                f,
                "{} <- {}, {} ({})",
                ComponentName::ALU,
                ComponentName::ACC,
                source,
                control
            ),
            RtnStep::RegOperation {
                destination,
                control,
                source,
            } => {
                let sign = if *control == ControlSignal::DEC { "-" } else { "+" };
                match source {
                    Some(name) => write!(f, "{} <- {} {} {}", destination, destination, sign, name),
                    None => write!(f, "{} <- {} {} 1", destination, destination, sign),
                }
            }
        }
    }
}

/// Static description of one instruction: how it is written, how it is
/// encoded, and how the control unit executes it.
#[derive(Clone, Copy, Debug)]
pub struct InstructionDefinition {
    pub mnemonic: &'static str,
    pub opcode: u8,
    pub addressing_mode: AddressingMode,
    pub description: &'static str,
    pub long_operand: bool,
}

macro_rules! def {
    ($mnemonic:expr, $opcode:expr, $mode:ident, $long:expr, $description:expr) => {
        InstructionDefinition {
            mnemonic: $mnemonic,
            opcode: $opcode,
            addressing_mode: AddressingMode::$mode,
            description: $description,
            long_operand: $long,
        }
    };
}

/// The instruction catalogue, indexed by opcode.
#[rustfmt::skip]
pub static INSTRUCTION_SET: [InstructionDefinition; opcodes::COUNT] = [
    def!("LDM", opcodes::LDM,           Immediate, true,  "Load immediate value into accumulator"),
    def!("LDD", opcodes::LDD,           Direct,    true,  "Load value from memory into accumulator"),
    def!("LDI", opcodes::LDI,           Indirect,  true,  "Load value from memory address pointed to by operand into accumulator"),
    def!("LDX", opcodes::LDX,           Indexed,   true,  "Load value from memory address offset by index register into accumulator"),
    def!("LDR", opcodes::LDR,           Immediate, true,  "Load immediate value into index register"),
    def!("MOV", opcodes::MOV,           Register,  false, "Move value from accumulator into given register"),
    def!("STO", opcodes::STO,           Direct,    true,  "Store accumulator into memory"),
    def!("ADD", opcodes::ADD_DIRECT,    Direct,    true,  "Add value from memory to accumulator"),
    def!("ADD", opcodes::ADD_IMMEDIATE, Immediate, true,  "Add immediate value to accumulator"),
    def!("SUB", opcodes::SUB_DIRECT,    Direct,    true,  "Subtract value from memory from accumulator"),
    def!("SUB", opcodes::SUB_IMMEDIATE, Immediate, true,  "Subtract immediate value from accumulator"),
    def!("INC", opcodes::INC,           Register,  false, "Increment given register by 1"),
    def!("DEC", opcodes::DEC,           Register,  false, "Decrement given register by 1"),
    def!("JMP", opcodes::JMP,           Immediate, true,  "Jump to address in operand"),
    def!("CMP", opcodes::CMP_DIRECT,    Direct,    true,  "Compare value from memory with accumulator"),
    def!("CMP", opcodes::CMP_IMMEDIATE, Immediate, true,  "Compare immediate value with accumulator"),
    def!("CMI", opcodes::CMI,           Indirect,  true,  "Compare accumulator with value at address pointed to by operand"),
    def!("JPE", opcodes::JPE,           Immediate, true,  "Jump to address in operand if E flag is set"),
    def!("JPN", opcodes::JPN,           Immediate, true,  "Jump to address in operand if E flag is cleared"),
    def!("IN",  opcodes::IN,            None,      false, "Input byte from input port into accumulator"),
    def!("OUT", opcodes::OUT,           None,      false, "Output low byte of accumulator to output port"),
    def!("END", opcodes::END,           None,      false, "Halt program execution"),
    def!("AND", opcodes::AND_IMMEDIATE, Immediate, true,  "Bitwise AND immediate value with accumulator"),
    def!("AND", opcodes::AND_DIRECT,    Direct,    true,  "Bitwise AND value from memory with accumulator"),
    def!("XOR", opcodes::XOR_IMMEDIATE, Immediate, true,  "Bitwise XOR immediate value with accumulator"),
    def!("XOR", opcodes::XOR_DIRECT,    Direct,    true,  "Bitwise XOR value from memory with accumulator"),
    def!("OR",  opcodes::OR_IMMEDIATE,  Immediate, true,  "Bitwise OR immediate value with accumulator"),
    def!("OR",  opcodes::OR_DIRECT,     Direct,    true,  "Bitwise OR value from memory with accumulator"),
    def!("LSL", opcodes::LSL,           Immediate, false, "Logical shift left accumulator by operand"),
    def!("LSR", opcodes::LSR,           Immediate, false, "Logical shift right accumulator by operand"),
    def!("STI", opcodes::STI,           Indirect,  true,  "Store accumulator at address pointed to by operand"),
    def!("STX", opcodes::STX,           Indexed,   true,  "Store accumulator at address offset by index register"),
];

/// Looks up an instruction definition by opcode.
pub fn instruction(opcode: u8) -> Option<&'static InstructionDefinition> {
    INSTRUCTION_SET.get(opcode as usize)
}

/// All definitions sharing a mnemonic, in opcode order.
///
/// Overloaded mnemonics (ADD, SUB, AND, OR, XOR, CMP) yield two entries;
/// the assembler disambiguates by the shape of the operand token.
pub fn definitions_for_mnemonic(mnemonic: &str) -> Vec<&'static InstructionDefinition> {
    INSTRUCTION_SET
        .iter()
        .filter(|definition| definition.mnemonic == mnemonic)
        .collect()
}

/// Packs an opcode and a short operand into an instruction word.
pub const fn make_word(opcode: u8, operand: u8) -> Word {
    ((opcode as Word) << constants::OPCODE_SHIFT) | operand as Word
}

const fn transfer(source: ComponentName, destination: ComponentName) -> RtnStep {
    RtnStep::Transfer {
        source,
        destination: Destination::Component(destination),
    }
}

const ADDRESS_STEP: RtnStep = RtnStep::MemoryAccess {
    is_address: true,
    control: ControlSignal::READ,
};

const DATA_READ_STEP: RtnStep = RtnStep::MemoryAccess {
    is_address: false,
    control: ControlSignal::READ,
};

const DATA_WRITE_STEP: RtnStep = RtnStep::MemoryAccess {
    is_address: false,
    control: ControlSignal::WRITE,
};

/// Resolve a direct operand: the operand word in MDR becomes an address and
/// the addressed cell lands back in MDR.
pub fn direct_addressing_steps() -> Vec<RtnStep> {
    vec![
        transfer(ComponentName::MDR, ComponentName::MAR),
        ADDRESS_STEP,
        DATA_READ_STEP,
    ]
}

/// Resolve an indirect operand: direct resolution loads the pointer, then a
/// second round trip loads the pointed-to cell.
pub fn indirect_addressing_steps() -> Vec<RtnStep> {
    let mut steps = direct_addressing_steps();
    steps.extend(direct_addressing_steps());
    steps
}

/// Resolve an indexed operand: the operand plus IX becomes the address.
pub fn indexed_addressing_steps() -> Vec<RtnStep> {
    vec![
        transfer(ComponentName::MDR, ComponentName::MAR),
        RtnStep::RegOperation {
            destination: Destination::Component(ComponentName::MAR),
            control: ControlSignal::INC,
            source: Some(ComponentName::IX),
        },
        ADDRESS_STEP,
        DATA_READ_STEP,
    ]
}

/// The canonical fetch: next instruction word from memory into CIR.
pub fn fetch_steps() -> Vec<RtnStep> {
    vec![
        transfer(ComponentName::PC, ComponentName::MAR),
        ADDRESS_STEP,
        DATA_READ_STEP,
        transfer(ComponentName::MDR, ComponentName::CIR),
        RtnStep::RegOperation {
            destination: Destination::Component(ComponentName::PC),
            control: ControlSignal::INC,
            source: None,
        },
    ]
}

/// The canonical decode: hand the instruction word to the control unit.
pub fn decode_steps() -> Vec<RtnStep> {
    vec![transfer(ComponentName::CIR, ComponentName::CU)]
}

/// Decode plus the extra memory round trip a long-operand instruction needs.
/// After the final step the operand word sits in MDR.
pub fn long_operand_fetch_steps() -> Vec<RtnStep> {
    vec![
        transfer(ComponentName::CIR, ComponentName::CU),
        transfer(ComponentName::PC, ComponentName::MAR),
        ADDRESS_STEP,
        DATA_READ_STEP,
        RtnStep::RegOperation {
            destination: Destination::Component(ComponentName::PC),
            control: ControlSignal::INC,
            source: None,
        },
    ]
}

fn alu_op(source: ComponentName, control: ControlSignal) -> RtnStep {
    RtnStep::AluOperation { source, control }
}

fn alu_result_to_acc() -> RtnStep {
    transfer(ComponentName::ALU, ComponentName::ACC)
}

fn arithmetic_direct(control: ControlSignal) -> Vec<RtnStep> {
    let mut steps = direct_addressing_steps();
    steps.push(alu_op(ComponentName::MDR, control));
    steps.push(alu_result_to_acc());
    steps
}

fn arithmetic_immediate(control: ControlSignal) -> Vec<RtnStep> {
    vec![alu_op(ComponentName::MDR, control), alu_result_to_acc()]
}

fn store_tail() -> Vec<RtnStep> {
    vec![
        transfer(ComponentName::MDR, ComponentName::MAR),
        transfer(ComponentName::ACC, ComponentName::MDR),
        ADDRESS_STEP,
        DATA_WRITE_STEP,
    ]
}

impl InstructionDefinition {
    /// The execute-phase RTN sequence for this instruction. END yields an
    /// empty sequence; reaching it with nothing left to run is the halt
    /// condition.
    pub fn rtn_sequence(&self) -> Vec<RtnStep> {
        match self.opcode {
            opcodes::LDM => vec![transfer(ComponentName::MDR, ComponentName::ACC)],
            opcodes::LDD => {
                let mut steps = direct_addressing_steps();
                steps.push(transfer(ComponentName::MDR, ComponentName::ACC));
                steps
            }
            opcodes::LDI => {
                let mut steps = indirect_addressing_steps();
                steps.push(transfer(ComponentName::MDR, ComponentName::ACC));
                steps
            }
            opcodes::LDX => {
                let mut steps = indexed_addressing_steps();
                steps.push(transfer(ComponentName::MDR, ComponentName::ACC));
                steps
            }
            opcodes::LDR => vec![transfer(ComponentName::MDR, ComponentName::IX)],
            opcodes::MOV => vec![RtnStep::Transfer {
                source: ComponentName::ACC,
                destination: Destination::OperandRegister,
            }],
            opcodes::STO => store_tail(),
            opcodes::STI => {
                // The first round trip swaps the pointer into MDR; the tail
                // then stores through it exactly like STO.
                let mut steps = direct_addressing_steps();
                steps.extend(store_tail());
                steps
            }
            opcodes::STX => vec![
                transfer(ComponentName::MDR, ComponentName::MAR),
                RtnStep::RegOperation {
                    destination: Destination::Component(ComponentName::MAR),
                    control: ControlSignal::INC,
                    source: Some(ComponentName::IX),
                },
                transfer(ComponentName::ACC, ComponentName::MDR),
                ADDRESS_STEP,
                DATA_WRITE_STEP,
            ],
            opcodes::ADD_DIRECT => arithmetic_direct(ControlSignal::ADD),
            opcodes::ADD_IMMEDIATE => arithmetic_immediate(ControlSignal::ADD),
            opcodes::SUB_DIRECT => arithmetic_direct(ControlSignal::SUB),
            opcodes::SUB_IMMEDIATE => arithmetic_immediate(ControlSignal::SUB),
            opcodes::AND_DIRECT => arithmetic_direct(ControlSignal::AND),
            opcodes::AND_IMMEDIATE => arithmetic_immediate(ControlSignal::AND),
            opcodes::OR_DIRECT => arithmetic_direct(ControlSignal::OR),
            opcodes::OR_IMMEDIATE => arithmetic_immediate(ControlSignal::OR),
            opcodes::XOR_DIRECT => arithmetic_direct(ControlSignal::XOR),
            opcodes::XOR_IMMEDIATE => arithmetic_immediate(ControlSignal::XOR),
            opcodes::INC => vec![RtnStep::RegOperation {
                destination: Destination::OperandRegister,
                control: ControlSignal::INC,
                source: None,
            }],
            opcodes::DEC => vec![RtnStep::RegOperation {
                destination: Destination::OperandRegister,
                control: ControlSignal::DEC,
                source: None,
            }],
            opcodes::JMP => vec![transfer(ComponentName::MDR, ComponentName::PC)],
            opcodes::CMP_DIRECT => {
                let mut steps = direct_addressing_steps();
                steps.push(alu_op(ComponentName::MDR, ControlSignal::CMP));
                steps
            }
            opcodes::CMP_IMMEDIATE => vec![alu_op(ComponentName::MDR, ControlSignal::CMP)],
            opcodes::CMI => {
                let mut steps = indirect_addressing_steps();
                steps.push(alu_op(ComponentName::MDR, ControlSignal::CMP));
                steps
            }
            opcodes::JPE => vec![RtnStep::ConditionalTransfer {
                source: ComponentName::MDR,
                destination: Destination::Component(ComponentName::PC),
                expected: true,
            }],
            opcodes::JPN => vec![RtnStep::ConditionalTransfer {
                source: ComponentName::MDR,
                destination: Destination::Component(ComponentName::PC),
                expected: false,
            }],
            opcodes::IN => vec![transfer(ComponentName::IN, ComponentName::ACC)],
            opcodes::OUT => vec![transfer(ComponentName::ACC, ComponentName::OUT)],
            // The shift count is the short operand, read straight out of the
            // control unit.
            opcodes::LSL => vec![alu_op(ComponentName::CU, ControlSignal::LSL), alu_result_to_acc()],
            opcodes::LSR => vec![alu_op(ComponentName::CU, ControlSignal::LSR), alu_result_to_acc()],
            opcodes::END => Vec::new(),
            _ => Vec::new(),
        }
    }
}
