use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::ToPrimitive;
use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;

/// Labels for every observable part of the machine.
///
/// RTN steps refer to components by these names, and snapshots key their
/// views off them. The register-like names double as the spelling a program
/// may use for a register operand (see [`RegisterIndex`]).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ComponentName {
    MAR, // Memory Address Register
    MDR, // Memory Data Register
    PC,  // Program Counter
    CIR, // Current Instruction Register
    ACC, // Accumulator
    IX,  // Index Register
    CU,  // Control Unit
    IN,  // Input port
    OUT, // Output port
    ALU, // Arithmetic Logic Unit
    CmpFlag,
    RamAddress,
    RamData,
    InnerDataBus,
    AddressBus,
}

/// Addressing modes of the teaching instruction set.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AddressingMode {
    Immediate,
    Direct,
    Indirect,
    Indexed,
    Register,
    None,
}

/// Control signals asserted on components while an RTN step executes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ControlSignal {
    READ,
    WRITE,
    ADD,
    SUB,
    CMP,
    INC,
    DEC,
    AND,
    OR,
    XOR,
    LSL,
    LSR,
}

/// The three phases of the instruction cycle, walked in strict order forever.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CyclePhase {
    Fetch,
    Decode,
    Execute,
}

impl CyclePhase {
    pub fn next(self) -> CyclePhase {
        match self {
            CyclePhase::Fetch => CyclePhase::Decode,
            CyclePhase::Decode => CyclePhase::Execute,
            CyclePhase::Execute => CyclePhase::Fetch,
        }
    }
}

/// Rendering choices for word values.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayMode {
    Hex,
    Decimal,
    Binary,
}

/// Numeric indices of the registers reachable through a register operand.
///
/// These are the only legal low-byte values for MOV, INC and DEC.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum RegisterIndex {
    ACC,
    IX,
    PC,
    MAR,
    MDR,
    CIR,
}

impl RegisterIndex {
    /// The component a register index denotes.
    pub fn component(self) -> ComponentName {
        match self {
            RegisterIndex::ACC => ComponentName::ACC,
            RegisterIndex::IX => ComponentName::IX,
            RegisterIndex::PC => ComponentName::PC,
            RegisterIndex::MAR => ComponentName::MAR,
            RegisterIndex::MDR => ComponentName::MDR,
            RegisterIndex::CIR => ComponentName::CIR,
        }
    }
}

#[inline]
pub fn register_index(id: RegisterIndex) -> usize {
    id.to_usize().unwrap()
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseEnumError {
    pub value: String,
    pub enum_name: &'static str,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Failed to parse \"{}\" as {}.",
            &self.value, &self.enum_name
        )
    }
}

impl StdError for ParseEnumError {}

impl FromStr for RegisterIndex {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<RegisterIndex, ParseEnumError> {
        match s {
            "ACC" => Ok(RegisterIndex::ACC),
            "IX" => Ok(RegisterIndex::IX),
            "PC" => Ok(RegisterIndex::PC),
            "MAR" => Ok(RegisterIndex::MAR),
            "MDR" => Ok(RegisterIndex::MDR),
            "CIR" => Ok(RegisterIndex::CIR),
            _ => Err(ParseEnumError {
                value: s.to_string(),
                enum_name: "RegisterIndex",
            }),
        }
    }
}

macro_rules! impl_enum_display {
    ($e:ty) => {
        impl std::fmt::Display for $e {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::Debug::fmt(self, f)
            }
        }
    };
}

impl_enum_display!(ComponentName);
impl_enum_display!(AddressingMode);
impl_enum_display!(ControlSignal);
impl_enum_display!(CyclePhase);
impl_enum_display!(RegisterIndex);
