use std::error::Error as StdError;
use std::fmt;

/// Everything that can go wrong while assembling.
///
/// The stepper never panics on bad source: any of these moves it into its
/// terminal error phase and the message rides out on the snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The line matches none of the accepted shapes.
    InvalidLine { line: String },
    UnknownMnemonic { mnemonic: String },
    /// An overloaded mnemonic with no operand token to disambiguate it.
    AmbiguousMnemonic { mnemonic: String },
    /// A token that should be an immediate literal is not one.
    InvalidImmediate { token: String },
    /// An operand that is neither a literal, a known label, nor a register.
    UnknownOperand { token: String },
    OperandOutOfRange { value: u32 },
    /// The program never mentions END.
    MissingEnd,
    StepLimitExceeded { limit: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidLine { line } => write!(f, "invalid line: \"{}\"", line),
            Error::UnknownMnemonic { mnemonic } => {
                write!(f, "unknown instruction mnemonic \"{}\"", mnemonic)
            }
            Error::AmbiguousMnemonic { mnemonic } => write!(
                f,
                "ambiguous instruction \"{}\" requires an operand",
                mnemonic
            ),
            Error::InvalidImmediate { token } => write!(
                f,
                "invalid immediate value \"{}\": immediates start with '#', 'B' or '&'",
                token
            ),
            Error::UnknownOperand { token } => {
                write!(f, "unknown operand or label \"{}\"", token)
            }
            Error::OperandOutOfRange { value } => {
                write!(f, "operand value {} out of range (0 to 65535)", value)
            }
            Error::MissingEnd => f.write_str("program must contain an END instruction"),
            Error::StepLimitExceeded { limit } => {
                write!(f, "assembly did not finish within {} steps", limit)
            }
        }
    }
}

impl StdError for Error {}
