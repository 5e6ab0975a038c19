use crate::error::Error;
use crate::labels::{lookup, LabelTable};
use crate::records::ParsingRecord;
use std::str::FromStr;
use tcpu::{
    definitions_for_mnemonic, make_word, AddressingMode, InstructionDefinition, RegisterIndex,
    Word,
};

/// Picks the definition an overloaded mnemonic means, from the shape of its
/// operand token: an immediate prefix selects the IMMEDIATE form, anything
/// else the first non-IMMEDIATE form.
pub fn select_definition<'a>(
    mnemonic: &str,
    definitions: &[&'a InstructionDefinition],
    operand_token: Option<&str>,
) -> Result<&'a InstructionDefinition, Error> {
    if definitions.len() == 1 {
        return Ok(definitions[0]);
    }

    let token = operand_token.ok_or_else(|| Error::AmbiguousMnemonic {
        mnemonic: mnemonic.to_string(),
    })?;

    let wants_immediate = token.starts_with('#') || token.starts_with('B') || token.starts_with('&');
    definitions
        .iter()
        .find(|definition| {
            if wants_immediate {
                definition.addressing_mode == AddressingMode::Immediate
            } else {
                definition.addressing_mode != AddressingMode::Immediate
            }
        })
        .copied()
        .ok_or_else(|| Error::AmbiguousMnemonic {
            mnemonic: mnemonic.to_string(),
        })
}

/// Parses an immediate literal: `#` decimal, `B` binary, `&` hexadecimal.
pub fn literal_value(token: &str) -> Result<Word, Error> {
    let radix = match token.chars().next() {
        Some('#') => 10,
        Some('B') => 2,
        Some('&') => 16,
        _ => {
            return Err(Error::InvalidImmediate {
                token: token.to_string(),
            })
        }
    };

    let value = u32::from_str_radix(&token[1..], radix).map_err(|_| Error::InvalidImmediate {
        token: token.to_string(),
    })?;
    if value > 0xFFFF {
        return Err(Error::OperandOutOfRange { value });
    }
    Ok(value as Word)
}

/// Resolves an operand token to its word value: a literal, a declared
/// instruction or variable label, or one of the six register names.
pub fn resolve_operand(
    token: &str,
    instruction_labels: &LabelTable,
    variable_labels: &LabelTable,
) -> Result<Word, Error> {
    if token.starts_with('#') || token.starts_with('B') || token.starts_with('&') {
        return literal_value(token);
    }

    let name = token.to_uppercase();
    if let Some(address) = lookup(instruction_labels, &name) {
        return Ok(address);
    }
    if let Some(address) = lookup(variable_labels, &name) {
        return Ok(address);
    }
    if let Ok(register) = RegisterIndex::from_str(&name) {
        return Ok(register as Word);
    }

    Err(Error::UnknownOperand {
        token: token.to_string(),
    })
}

/// Emits the word(s) for one instruction record: one word with the operand
/// in the low byte for short forms, the instruction word plus the full
/// operand word for long forms.
pub fn emit_instruction(
    record: &ParsingRecord,
    instruction_labels: &LabelTable,
    variable_labels: &LabelTable,
) -> Result<Vec<Word>, Error> {
    let mnemonic = match &record.mnemonic {
        Some(mnemonic) => mnemonic,
        // A bare label line produces no words.
        None => return Ok(Vec::new()),
    };

    let definitions = definitions_for_mnemonic(mnemonic);
    if definitions.is_empty() {
        return Err(Error::UnknownMnemonic {
            mnemonic: mnemonic.clone(),
        });
    }
    let definition = select_definition(mnemonic, &definitions, record.operand_token.as_deref())?;

    if definition.addressing_mode == AddressingMode::None {
        return Ok(vec![make_word(definition.opcode, 0)]);
    }

    let token = record
        .operand_token
        .as_deref()
        .ok_or_else(|| Error::InvalidLine {
            line: format!("{} requires an operand", mnemonic),
        })?;
    let value = resolve_operand(token, instruction_labels, variable_labels)?;

    if definition.long_operand {
        Ok(vec![make_word(definition.opcode, 0), value])
    } else {
        // Short operands live in the low byte: register indices for MOV,
        // INC and DEC, shift counts for LSL and LSR.
        if value > 0xFF {
            return Err(Error::OperandOutOfRange {
                value: u32::from(value),
            });
        }
        Ok(vec![make_word(definition.opcode, value as u8)])
    }
}

/// Emits the single word of a variable definition.
pub fn emit_variable(record: &ParsingRecord) -> Result<Word, Error> {
    let token = record
        .operand_token
        .as_deref()
        .ok_or_else(|| Error::InvalidImmediate {
            token: String::new(),
        })?;
    literal_value(token)
}
