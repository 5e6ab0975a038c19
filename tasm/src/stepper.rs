use crate::emit::{emit_instruction, emit_variable};
use crate::error::Error;
use crate::labels::{insert, lookup, LabelTable};
use crate::records::{parse_line, ParsingRecord};
use crate::snapshot::Snapshot;
use crate::source_map::{SourceMap, SourceMapItem};
use tcpu::Word;

/// Where the stepper currently is. DONE and ERROR are terminal; stepping in
/// them is an observable no-op.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Trim,
    Pass1Scan,
    Pass1Finalise,
    Pass2EmitInstructions,
    Pass2EmitVariables,
    Done,
    Error,
}

impl Phase {
    /// The pass number a display shows for this phase.
    pub fn pass(self) -> u8 {
        match self {
            Phase::Trim => 0,
            Phase::Pass1Scan | Phase::Pass1Finalise => 1,
            _ => 2,
        }
    }
}

/// The two-pass assembler, driven one micro-step at a time.
///
/// Each call to [`step`](Assembler::step) performs one unit of work — one
/// raw line trimmed, one trimmed line scanned, one record emitted — and
/// returns a [`Snapshot`] of everything a viewer needs. Non-interactive
/// callers use [`run_to_completion`](Assembler::run_to_completion) or the
/// crate-level [`assemble`](crate::assemble).
pub struct Assembler {
    raw_lines: Vec<String>,
    trimmed_lines: Vec<String>,
    phase: Phase,
    raw_cursor: usize,
    scan_cursor: usize,
    emit_cursor: usize,
    variable_cursor: usize,
    instruction_address: Word,
    variable_address: Word,
    instruction_labels: LabelTable,
    variable_slots: LabelTable,
    variable_labels: LabelTable,
    finalised: bool,
    records: Vec<ParsingRecord>,
    instruction_records: Vec<ParsingRecord>,
    variable_records: Vec<ParsingRecord>,
    emitted: Vec<Word>,
    source_map: SourceMap,
    error: Option<Error>,
}

impl Assembler {
    pub fn new(source: &str) -> Assembler {
        Assembler {
            raw_lines: source.lines().map(str::to_string).collect(),
            trimmed_lines: Vec::new(),
            phase: Phase::Trim,
            raw_cursor: 0,
            scan_cursor: 0,
            emit_cursor: 0,
            variable_cursor: 0,
            instruction_address: 0,
            variable_address: 0,
            instruction_labels: Vec::new(),
            variable_slots: Vec::new(),
            variable_labels: Vec::new(),
            finalised: false,
            records: Vec::new(),
            instruction_records: Vec::new(),
            variable_records: Vec::new(),
            emitted: Vec::new(),
            source_map: Vec::new(),
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Words emitted so far, in address order from 0.
    pub fn emitted(&self) -> &[Word] {
        &self.emitted
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    pub fn trimmed_lines(&self) -> &[String] {
        &self.trimmed_lines
    }

    /// Performs one micro-step of the current phase.
    pub fn step(&mut self) -> Snapshot {
        match self.phase {
            Phase::Trim => self.step_trim(),
            Phase::Pass1Scan => self.step_scan(),
            Phase::Pass1Finalise => self.step_finalise(),
            Phase::Pass2EmitInstructions => self.step_emit_instructions(),
            Phase::Pass2EmitVariables => self.step_emit_variables(),
            Phase::Done | Phase::Error => self.identity_snapshot(),
        }
    }

    /// Drives the stepper to DONE without intermediate snapshots. Errors
    /// that the stepper would carry in its snapshot are raised instead.
    pub fn run_to_completion(&mut self, max_steps: usize) -> Result<Vec<Word>, Error> {
        for _ in 0..max_steps {
            match self.phase {
                Phase::Done => return Ok(self.emitted.clone()),
                Phase::Error => return Err(self.error.clone().unwrap_or(Error::MissingEnd)),
                _ => {
                    self.step();
                }
            }
        }
        match self.phase {
            Phase::Done => Ok(self.emitted.clone()),
            Phase::Error => Err(self.error.clone().unwrap_or(Error::MissingEnd)),
            _ => Err(Error::StepLimitExceeded { limit: max_steps }),
        }
    }

    /// A generous bound for [`run_to_completion`]: every line is visited at
    /// most once per phase.
    pub fn step_limit(&self) -> usize {
        self.raw_lines.len() * 4 + 16
    }

    fn step_trim(&mut self) -> Snapshot {
        if self.raw_cursor >= self.raw_lines.len() {
            self.phase = Phase::Pass1Scan;
            return self.step();
        }

        let index = self.raw_cursor;
        let raw = self.raw_lines[index].clone();
        let trimmed = raw.split(';').next().unwrap_or("").trim().to_string();
        if !trimmed.is_empty() {
            self.trimmed_lines.push(trimmed);
        }
        self.raw_cursor += 1;
        if self.raw_cursor >= self.raw_lines.len() {
            self.phase = Phase::Pass1Scan;
        }

        let mut snapshot = self.base_snapshot(Phase::Trim);
        snapshot.line_index = Some(index);
        snapshot.line_text = Some(raw);
        snapshot.cursor_row = Some(index);
        snapshot.editor_text = Some(self.progressive_text());
        snapshot
    }

    fn step_scan(&mut self) -> Snapshot {
        if self.scan_cursor >= self.trimmed_lines.len() {
            self.phase = Phase::Pass1Finalise;
            return self.step();
        }

        let index = self.scan_cursor;
        let line = self.trimmed_lines[index].clone();
        let record = match parse_line(&line, index, self.instruction_address, self.variable_address)
        {
            Ok(record) => record,
            Err(error) => return self.fail(error),
        };

        if let Some(label) = &record.new_instruction_label {
            insert(
                &mut self.instruction_labels,
                label,
                record.instruction_address,
            );
        }
        if let Some(label) = &record.new_variable_label {
            insert(&mut self.variable_slots, label, record.variable_address);
        }
        self.instruction_address = record.next_instruction_address;
        self.variable_address = record.next_variable_address;
        self.scan_cursor += 1;
        if self.scan_cursor >= self.trimmed_lines.len() {
            self.phase = Phase::Pass1Finalise;
        }

        let mut snapshot = self.base_snapshot(Phase::Pass1Scan);
        snapshot.line_index = Some(index);
        snapshot.line_text = Some(line);
        snapshot.cursor_row = Some(index);
        snapshot.highlight_instruction_label = record.new_instruction_label.clone();
        snapshot.highlight_variable_label = record.new_variable_label.clone();
        self.records.push(record);
        snapshot
    }

    fn step_finalise(&mut self) -> Snapshot {
        let has_end = self
            .records
            .iter()
            .any(|record| record.mnemonic.as_deref() == Some("END"));
        if !has_end {
            return self.fail(Error::MissingEnd);
        }

        // Variables pack immediately after the last instruction word, so a
        // relative slot k becomes the absolute address N + k.
        let n = self.instruction_address;
        self.variable_labels = self
            .variable_slots
            .iter()
            .map(|(name, slot)| (name.clone(), n.wrapping_add(*slot)))
            .collect();
        self.finalised = true;

        for record in &self.records {
            if record.new_variable_label.is_some() {
                self.variable_records.push(record.clone());
            } else if record.mnemonic.is_some() {
                self.instruction_records.push(record.clone());
            }
            // Bare labels emit nothing and are dropped here.
        }
        self.phase = Phase::Pass2EmitInstructions;

        let mut snapshot = self.base_snapshot(Phase::Pass1Finalise);
        snapshot.status = Some(format!("pass 1 complete: {} instruction words", n));
        snapshot
    }

    fn step_emit_instructions(&mut self) -> Snapshot {
        if self.emit_cursor >= self.instruction_records.len() {
            self.phase = Phase::Pass2EmitVariables;
            return self.step();
        }

        let record = self.instruction_records[self.emit_cursor].clone();
        let words =
            match emit_instruction(&record, &self.instruction_labels, &self.variable_labels) {
                Ok(words) => words,
                Err(error) => return self.fail(error),
            };

        let base = record.instruction_address;
        let writes: Vec<(Word, Word)> = words
            .iter()
            .enumerate()
            .map(|(offset, word)| (base.wrapping_add(offset as Word), *word))
            .collect();
        if !words.is_empty() {
            self.source_map.push(SourceMapItem {
                address: base,
                line: record.line_index,
            });
        }
        self.emitted.extend(words.iter().copied());
        self.emit_cursor += 1;
        if self.emit_cursor >= self.instruction_records.len() {
            self.phase = Phase::Pass2EmitVariables;
        }

        let mut snapshot = self.base_snapshot(Phase::Pass2EmitInstructions);
        snapshot.line_index = Some(record.line_index);
        snapshot.line_text = self.trimmed_lines.get(record.line_index).cloned();
        snapshot.cursor_row = Some(record.line_index);
        snapshot.highlight_instruction_label = record.new_instruction_label.clone();
        snapshot.memory_writes = writes;
        snapshot
    }

    fn step_emit_variables(&mut self) -> Snapshot {
        if self.variable_cursor >= self.variable_records.len() {
            self.phase = Phase::Done;
            return self.step();
        }

        let record = self.variable_records[self.variable_cursor].clone();
        let word = match emit_variable(&record) {
            Ok(word) => word,
            Err(error) => return self.fail(error),
        };
        let label = record.new_variable_label.clone().unwrap_or_default();
        let address = match lookup(&self.variable_labels, &label) {
            Some(address) => address,
            None => {
                return self.fail(Error::UnknownOperand { token: label });
            }
        };

        self.emitted.push(word);
        self.source_map.push(SourceMapItem {
            address,
            line: record.line_index,
        });
        self.variable_cursor += 1;
        if self.variable_cursor >= self.variable_records.len() {
            self.phase = Phase::Done;
        }

        let mut snapshot = self.base_snapshot(Phase::Pass2EmitVariables);
        snapshot.line_index = Some(record.line_index);
        snapshot.line_text = self.trimmed_lines.get(record.line_index).cloned();
        snapshot.cursor_row = Some(record.line_index);
        snapshot.highlight_variable_label = Some(label);
        snapshot.memory_writes = vec![(address, word)];
        snapshot
    }

    fn identity_snapshot(&self) -> Snapshot {
        let mut snapshot = self.base_snapshot(self.phase);
        if let Some(error) = &self.error {
            snapshot.status = Some(error.to_string());
        }
        snapshot
    }

    fn fail(&mut self, error: Error) -> Snapshot {
        self.phase = Phase::Error;
        self.error = Some(error);
        self.identity_snapshot()
    }

    fn base_snapshot(&self, phase: Phase) -> Snapshot {
        Snapshot {
            phase,
            pass: phase.pass(),
            line_index: None,
            line_text: None,
            cursor_row: None,
            next_instruction_address: self.instruction_address,
            next_variable_address: self.variable_address,
            instruction_labels: self.instruction_labels.clone(),
            variable_labels: if self.finalised {
                self.variable_labels.clone()
            } else {
                self.variable_slots.clone()
            },
            highlight_instruction_label: None,
            highlight_variable_label: None,
            emitted_words: self.emitted.clone(),
            memory_writes: Vec::new(),
            editor_text: None,
            status: None,
        }
    }

    fn progressive_text(&self) -> String {
        let mut lines: Vec<&str> = self.trimmed_lines.iter().map(String::as_str).collect();
        lines.extend(self.raw_lines[self.raw_cursor..].iter().map(String::as_str));
        lines.join("\n")
    }
}
