use std::error::Error as StdError;
use std::fmt;

/// Errors surfaced by the simulator core.
///
/// All of these leave the machine in a consistent state; a caller may keep
/// stepping (or stop) after observing one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// An instruction word decoded to an opcode outside the catalogue.
    InvalidOpcode(u8),
    /// A register-index operand did not name any register.
    InvalidOperand(u8),
    /// A component was driven in a way the datapath does not wire up, such
    /// as computing on an ALU whose control is unset.
    InvalidUse(&'static str),
    /// A value handed to a display helper does not fit in a machine word.
    ValueOutOfRange(u32),
    /// `run_to_halt` gave up before the program reached END.
    StepLimitExceeded(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidOpcode(opcode) => write!(f, "invalid opcode: {}", opcode),
            Error::InvalidOperand(operand) => {
                write!(f, "operand {} does not name a register", operand)
            }
            Error::InvalidUse(what) => write!(f, "invalid component use: {}", what),
            Error::ValueOutOfRange(value) => {
                write!(f, "value {} out of range (0 to 65535)", value)
            }
            Error::StepLimitExceeded(limit) => {
                write!(f, "no halt within {} steps", limit)
            }
        }
    }
}

impl StdError for Error {}
