use num_traits::FromPrimitive;

use crate::alu::Alu;
use crate::bus::Bus;
use crate::constants;
use crate::enums::{AddressingMode, ComponentName, ControlSignal, CyclePhase, RegisterIndex};
use crate::error::Error;
use crate::instructions::{
    decode_steps, fetch_steps, instruction, long_operand_fetch_steps, Destination, RtnStep,
};
use crate::io::IoPort;
use crate::memory::Ram;
use crate::register::Register;
use crate::Word;

/// Outcome of one micro-step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickResult {
    /// A step executed; the machine can keep going.
    Running,
    /// An IN instruction found the input queue empty. Nothing changed and
    /// the same step retries once a byte has been fed.
    AwaitingInput,
    /// END has been reached; further steps are no-ops.
    Halted,
}

/// Every component the control unit drives, owned in one place. RTN handlers
/// borrow the whole set mutably for the duration of a single step.
pub struct Components {
    pub mar: Register,
    pub mdr: Register,
    pub pc: Register,
    pub cir: Register,
    pub acc: Register,
    pub ix: Register,
    pub alu: Alu,
    pub ram: Ram,
    pub io_in: IoPort,
    pub io_out: IoPort,
    pub inner_data_bus: Bus,
    pub address_bus: Bus,
}

impl Components {
    pub fn new() -> Components {
        Components {
            mar: Register::new(ComponentName::MAR),
            mdr: Register::new(ComponentName::MDR),
            pc: Register::new(ComponentName::PC),
            cir: Register::new(ComponentName::CIR),
            acc: Register::new(ComponentName::ACC),
            ix: Register::new(ComponentName::IX),
            alu: Alu::new(),
            ram: Ram::new(),
            io_in: IoPort::new(ComponentName::IN),
            io_out: IoPort::new(ComponentName::OUT),
            inner_data_bus: Bus::new(ComponentName::InnerDataBus),
            address_bus: Bus::new(ComponentName::AddressBus),
        }
    }

    /// Marks every component inactive and clears the bus endpoints, so that
    /// after the next step only the components it touched read as active.
    pub fn clear_activity(&mut self) {
        self.mar.set_active(false);
        self.mdr.set_active(false);
        self.pc.set_active(false);
        self.cir.set_active(false);
        self.acc.set_active(false);
        self.ix.set_active(false);
        self.alu.set_active(false);
        self.alu.flag_mut().set_active(false);
        self.ram.set_active(false);
        self.ram.address_mut().set_active(false);
        self.io_in.set_active(false);
        self.io_out.set_active(false);
        self.inner_data_bus.clear();
        self.address_bus.clear();
    }

    fn register_mut(&mut self, name: ComponentName) -> Option<&mut Register> {
        match name {
            ComponentName::MAR => Some(&mut self.mar),
            ComponentName::MDR => Some(&mut self.mdr),
            ComponentName::PC => Some(&mut self.pc),
            ComponentName::CIR => Some(&mut self.cir),
            ComponentName::ACC => Some(&mut self.acc),
            ComponentName::IX => Some(&mut self.ix),
            _ => None,
        }
    }
}

impl Default for Components {
    fn default() -> Components {
        Components::new()
    }
}

enum StepOutcome {
    Done,
    AwaitingInput,
}

/// The control unit: sequences fetch, decode and execute as explicit RTN
/// micro-operations and dispatches each step variant to its handler.
pub struct ControlUnit {
    instruction: Option<Word>,
    opcode: u8,
    operand: u8,
    sequence: Vec<RtnStep>,
    index: usize,
    phase: CyclePhase,
    current_step: Option<RtnStep>,
    last_step: Option<RtnStep>,
    active: bool,
}

impl ControlUnit {
    pub fn new() -> ControlUnit {
        ControlUnit {
            instruction: None,
            opcode: 0,
            operand: 0,
            sequence: fetch_steps(),
            index: 0,
            phase: CyclePhase::Fetch,
            current_step: None,
            last_step: None,
            active: false,
        }
    }

    /// Returns the control unit to its power-on state: no instruction, the
    /// fetch sequence queued from the top.
    pub fn reset(&mut self) {
        *self = ControlUnit::new();
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    pub fn operand(&self) -> u8 {
        self.operand
    }

    pub fn instruction(&self) -> Option<Word> {
        self.instruction
    }

    pub fn sequence(&self) -> &[RtnStep] {
        &self.sequence
    }

    pub fn sequence_index(&self) -> usize {
        self.index
    }

    pub fn current_step(&self) -> Option<RtnStep> {
        self.current_step
    }

    pub fn last_step(&self) -> Option<RtnStep> {
        self.last_step
    }

    pub fn active(&self) -> bool {
        self.active
    }

    fn operand_value(&self) -> Word {
        Word::from(self.operand)
    }

    /// Decodes an instruction word: opcode from the high byte, operand from
    /// the low byte. A long-operand instruction replaces the remaining
    /// decode sequence with the long-operand fetch, so the next steps pull
    /// the full operand word into MDR.
    fn load_instruction(&mut self, word: Word) -> Result<(), Error> {
        self.instruction = Some(word);
        self.opcode = (word >> constants::OPCODE_SHIFT) as u8;
        self.operand = (word & constants::OPERAND_MASK) as u8;

        let definition = instruction(self.opcode).ok_or(Error::InvalidOpcode(self.opcode))?;
        if definition.long_operand {
            self.sequence = long_operand_fetch_steps();
        }
        Ok(())
    }

    fn enter_phase(&mut self, phase: CyclePhase) -> Result<(), Error> {
        self.index = 0;
        self.sequence = match phase {
            CyclePhase::Fetch => fetch_steps(),
            CyclePhase::Decode => decode_steps(),
            CyclePhase::Execute => {
                let definition =
                    instruction(self.opcode).ok_or(Error::InvalidOpcode(self.opcode))?;
                definition.rtn_sequence()
            }
        };
        self.current_step = self.sequence.first().copied();
        Ok(())
    }

    /// Advances the machine by exactly one visible micro-operation.
    ///
    /// Phase transitions happen at the start of a tick, so the state an
    /// observer sees after the call always belongs to the step that just
    /// ran. An empty sequence means END was reached: the machine is halted
    /// and stays halted.
    pub fn step_cycle(&mut self, components: &mut Components) -> Result<TickResult, Error> {
        if self.sequence.is_empty() {
            self.current_step = None;
            return Ok(TickResult::Halted);
        }

        if self.index >= self.sequence.len() {
            self.phase = self.phase.next();
            self.enter_phase(self.phase)?;

            if self.sequence.is_empty() {
                self.current_step = None;
                return Ok(TickResult::Halted);
            }
        }

        let step = self.sequence[self.index];
        components.clear_activity();
        self.active = true;
        self.current_step = Some(step);

        match self.execute_step(step, components)? {
            StepOutcome::AwaitingInput => Ok(TickResult::AwaitingInput),
            StepOutcome::Done => {
                self.last_step = Some(step);
                self.index += 1;
                Ok(TickResult::Running)
            }
        }
    }

    fn execute_step(
        &mut self,
        step: RtnStep,
        components: &mut Components,
    ) -> Result<StepOutcome, Error> {
        match step {
            RtnStep::Transfer {
                source,
                destination,
            } => self.transfer(source, destination, components),
            RtnStep::ConditionalTransfer {
                source,
                destination,
                expected,
            } => {
                if components.alu.flag().read() == expected {
                    self.transfer(source, destination, components)
                } else {
                    Ok(StepOutcome::Done)
                }
            }
            RtnStep::MemoryAccess {
                is_address,
                control,
            } => {
                self.memory_access(is_address, control, components);
                Ok(StepOutcome::Done)
            }
            RtnStep::AluOperation { source, control } => {
                self.alu_operation(source, control, components)?;
                Ok(StepOutcome::Done)
            }
            RtnStep::RegOperation {
                destination,
                control,
                source,
            } => {
                self.reg_operation(destination, control, source, components)?;
                Ok(StepOutcome::Done)
            }
        }
    }

    /// Resolves a step destination to a concrete component, looking the
    /// operand byte up in the register-index table when needed.
    fn resolve_destination(&self, destination: Destination) -> Result<ComponentName, Error> {
        match destination {
            Destination::Component(name) => Ok(name),
            Destination::OperandRegister => RegisterIndex::from_u8(self.operand)
                .map(RegisterIndex::component)
                .ok_or(Error::InvalidOperand(self.operand)),
        }
    }

    fn read_component(
        &self,
        name: ComponentName,
        components: &mut Components,
    ) -> Result<Word, Error> {
        if let Some(register) = components.register_mut(name) {
            register.set_active(true);
            return Ok(register.read());
        }
        match name {
            ComponentName::ALU => {
                components.alu.set_active(true);
                Ok(components.alu.read())
            }
            ComponentName::CU => Ok(self.operand_value()),
            _ => Err(Error::InvalidUse("component is not a data-bus source")),
        }
    }

    fn write_component(
        &mut self,
        name: ComponentName,
        value: Word,
        components: &mut Components,
    ) -> Result<(), Error> {
        if let Some(register) = components.register_mut(name) {
            register.set_active(true);
            register.write(value);
            return Ok(());
        }
        match name {
            ComponentName::CU => self.load_instruction(value),
            ComponentName::OUT => {
                components.io_out.set_active(true);
                components
                    .io_out
                    .write((value & constants::OPERAND_MASK) as u8);
                Ok(())
            }
            _ => Err(Error::InvalidUse("component is not a data-bus destination")),
        }
    }

    fn transfer(
        &mut self,
        source: ComponentName,
        destination: Destination,
        components: &mut Components,
    ) -> Result<StepOutcome, Error> {
        let destination = self.resolve_destination(destination)?;

        let value = if source == ComponentName::IN {
            components.io_in.set_active(true);
            match components.io_in.read() {
                Some(byte) => Word::from(byte),
                None => return Ok(StepOutcome::AwaitingInput),
            }
        } else {
            self.read_component(source, components)?
        };

        components.inner_data_bus.record(&[(source, destination)]);
        self.write_component(destination, value, components)?;
        Ok(StepOutcome::Done)
    }

    fn memory_access(
        &mut self,
        is_address: bool,
        control: ControlSignal,
        components: &mut Components,
    ) {
        if is_address {
            components.mar.set_active(true);
            let address = components.mar.read();
            components.ram.address_mut().set_active(true);
            components.ram.address_mut().write(address);
            components
                .address_bus
                .record(&[(ComponentName::MAR, ComponentName::RamAddress)]);
        } else if control == ControlSignal::WRITE {
            components.mdr.set_active(true);
            let value = components.mdr.read();
            components.ram.set_active(true);
            components.ram.write(value);
            components
                .address_bus
                .record(&[(ComponentName::MDR, ComponentName::RamData)]);
        } else {
            components.ram.set_active(true);
            let value = components.ram.read();
            components.mdr.set_active(true);
            components.mdr.write(value);
            components
                .address_bus
                .record(&[(ComponentName::RamData, ComponentName::MDR)]);
        }
    }

    fn alu_operation(
        &mut self,
        source: ComponentName,
        control: ControlSignal,
        components: &mut Components,
    ) -> Result<(), Error> {
        components.acc.set_active(true);
        let acc = components.acc.read();
        let operand = self.read_component(source, components)?;

        components.inner_data_bus.record(&[
            (ComponentName::ACC, ComponentName::ALU),
            (source, ComponentName::ALU),
        ]);

        components.alu.set_active(true);
        components.alu.set_operands(acc, operand);
        components.alu.set_mode(control);
        components.alu.compute()
    }

    fn reg_operation(
        &mut self,
        destination: Destination,
        control: ControlSignal,
        source: Option<ComponentName>,
        components: &mut Components,
    ) -> Result<(), Error> {
        let offset = match source {
            Some(name) => self.read_component(name, components)?,
            None => 1,
        };

        let destination = self.resolve_destination(destination)?;
        let register = components
            .register_mut(destination)
            .ok_or(Error::InvalidUse("register operation on a non-register"))?;
        register.set_active(true);

        match control {
            ControlSignal::INC => register.inc(offset),
            ControlSignal::DEC => register.dec(offset),
            _ => return Err(Error::InvalidUse("register operation needs INC or DEC")),
        }
        Ok(())
    }

    /// A one-line account of where the machine is, for display surfaces:
    /// `"Fetching..."`, `"Decoding..."`, or the disassembled instruction
    /// during execution.
    pub fn disassembly(&self, components: &Components) -> String {
        match self.phase {
            CyclePhase::Fetch => "Fetching...".to_string(),
            CyclePhase::Decode => "Decoding...".to_string(),
            CyclePhase::Execute => self.stringify_instruction(components),
        }
    }

    fn stringify_instruction(&self, components: &Components) -> String {
        let definition = match instruction(self.opcode) {
            Some(definition) => definition,
            None => return format!("?{}", self.opcode),
        };

        if definition.addressing_mode == AddressingMode::None {
            return definition.mnemonic.to_string();
        }

        if definition.long_operand {
            // The fetched operand word is sitting in MDR by execute time.
            return format!("{} {}", definition.mnemonic, components.mdr.value());
        }

        if definition.addressing_mode == AddressingMode::Register {
            if let Some(register) = RegisterIndex::from_u8(self.operand) {
                return format!("{} {}", definition.mnemonic, register);
            }
        }
        format!("{} {}", definition.mnemonic, self.operand)
    }
}

impl Default for ControlUnit {
    fn default() -> ControlUnit {
        ControlUnit::new()
    }
}
