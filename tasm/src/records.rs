use crate::error::Error;
use crate::parser::{LineParser, Rule};
use matches::debug_assert_matches;
use pest::iterators::Pair;
use pest::Parser;
use tcpu::{definitions_for_mnemonic, Word};

/// Everything pass 1 learns about one trimmed source line.
///
/// The record carries the address counters as they stood when the line was
/// scanned, plus the counters for the following line, so pass 2 can emit
/// words without re-deriving any layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsingRecord {
    /// Index of the line in the trimmed source.
    pub line_index: usize,
    pub instruction_address: Word,
    /// Relative variable slot; rebased to an absolute address after pass 1.
    pub variable_address: Word,
    pub mnemonic: Option<String>,
    pub operand_token: Option<String>,
    pub new_instruction_label: Option<String>,
    pub new_variable_label: Option<String>,
    pub next_instruction_address: Word,
    pub next_variable_address: Word,
}

/// Parses one trimmed line into a record, advancing the address counters
/// according to what the line declares.
///
/// Accepted shapes:
/// 1. `LABEL: MNEMONIC OPERAND`
/// 2. `LABEL: MNEMONIC` where the mnemonic takes no operand (IN, OUT, END)
/// 3. `LABEL: IMMEDIATE` — a variable definition
/// 4. `MNEMONIC [OPERAND]`
/// 5. `LABEL:` — a bare label bound to the current instruction address
pub fn parse_line(
    line: &str,
    line_index: usize,
    instruction_address: Word,
    variable_address: Word,
) -> Result<ParsingRecord, Error> {
    let mut record = ParsingRecord {
        line_index,
        instruction_address,
        variable_address,
        mnemonic: None,
        operand_token: None,
        new_instruction_label: None,
        new_variable_label: None,
        next_instruction_address: instruction_address,
        next_variable_address: variable_address,
    };

    let line_pair = LineParser::parse(Rule::line, line)
        .map_err(|_| Error::InvalidLine {
            line: line.to_string(),
        })?
        .next()
        .unwrap();

    let statement = line_pair.into_inner().next().unwrap();
    debug_assert_matches!(statement.as_rule(), Rule::statement);
    let inner = statement.into_inner().next().unwrap();

    match inner.as_rule() {
        Rule::labeled => {
            let mut parts = inner.into_inner();
            let label = parts.next().unwrap().as_str().to_uppercase();

            match parts.next() {
                // A bare label marks the current instruction address.
                None => record.new_instruction_label = Some(label),
                Some(body) => {
                    let body = body.into_inner().next().unwrap();
                    match body.as_rule() {
                        Rule::literal => {
                            record.new_variable_label = Some(label);
                            record.operand_token = Some(body.as_str().to_string());
                            record.next_variable_address = variable_address.wrapping_add(1);
                        }
                        Rule::instruction => {
                            let (mnemonic, operand) = split_instruction(body);
                            if operand.is_none()
                                && !matches!(mnemonic.as_str(), "IN" | "OUT" | "END")
                            {
                                // A single token after a label is a variable
                                // value, and those must be immediates.
                                return Err(Error::InvalidImmediate { token: mnemonic });
                            }
                            advance_instruction(&mut record, &mnemonic)?;
                            record.new_instruction_label = Some(label);
                            record.mnemonic = Some(mnemonic);
                            record.operand_token = operand;
                        }
                        _ => unreachable!(),
                    }
                }
            }
        }
        Rule::instruction => {
            let (mnemonic, operand) = split_instruction(inner);
            advance_instruction(&mut record, &mnemonic)?;
            record.mnemonic = Some(mnemonic);
            record.operand_token = operand;
        }
        _ => unreachable!(),
    }

    Ok(record)
}

fn split_instruction(pair: Pair<Rule>) -> (String, Option<String>) {
    debug_assert_matches!(pair.as_rule(), Rule::instruction);
    let mut parts = pair.into_inner();
    let mnemonic = parts.next().unwrap().as_str().to_uppercase();
    let operand = parts.next().map(|operand| operand.as_str().to_string());
    (mnemonic, operand)
}

fn advance_instruction(record: &mut ParsingRecord, mnemonic: &str) -> Result<(), Error> {
    let definitions = definitions_for_mnemonic(mnemonic);
    match definitions.first() {
        None => Err(Error::UnknownMnemonic {
            mnemonic: mnemonic.to_string(),
        }),
        Some(definition) => {
            let span = if definition.long_operand { 2 } else { 1 };
            record.next_instruction_address = record.instruction_address.wrapping_add(span);
            Ok(())
        }
    }
}
