use crate::control::{Components, ControlUnit, TickResult};
use crate::error::Error;
use crate::snapshot::{self, CpuSnapshot};
use crate::Word;

/// Callback invoked after every micro-step with a full machine snapshot.
/// Display layers implement this; the snapshot is a value, so an observer
/// can never reach back into the machine.
pub trait StepObserver {
    fn after_step(&mut self, snapshot: &CpuSnapshot);
}

/// The assembled machine: every component plus the control unit, stepped
/// one RTN micro-operation at a time.
pub struct Processor {
    components: Components,
    cu: ControlUnit,
    cycles: u64,
    observer: Option<Box<dyn StepObserver>>,
}

impl Processor {
    pub fn new() -> Processor {
        Processor {
            components: Components::new(),
            cu: ControlUnit::new(),
            cycles: 0,
            observer: None,
        }
    }

    /// Loads a program image into memory starting at address 0 and resets
    /// the program counter, so the first fetch picks up the first word.
    pub fn load_program(&mut self, words: &[Word]) {
        for (address, word) in words.iter().enumerate() {
            self.components.ram.address_mut().write(address as Word);
            self.components.ram.write(*word);
        }
        self.components.pc.write(0);
        self.cu.reset();
        self.cycles = 0;
    }

    /// Advances the machine by one micro-operation.
    ///
    /// [`TickResult::AwaitingInput`] means an IN instruction is paused on an
    /// empty input queue; feed bytes with [`feed_input`](Processor::feed_input)
    /// and step again. Errors leave the machine consistent.
    pub fn step(&mut self) -> Result<TickResult, Error> {
        let result = self.cu.step_cycle(&mut self.components)?;
        if result == TickResult::Running {
            self.cycles += 1;
        }

        if self.observer.is_some() {
            let snapshot = snapshot::capture(&self.components, &self.cu, self.cycles);
            if let Some(observer) = self.observer.as_mut() {
                observer.after_step(&snapshot);
            }
        }
        Ok(result)
    }

    /// Steps until END, giving up after `max_steps` micro-operations.
    pub fn run_to_halt(&mut self, max_steps: usize) -> Result<u64, Error> {
        for _ in 0..max_steps {
            if let TickResult::Halted = self.step()? {
                return Ok(self.cycles);
            }
        }
        Err(Error::StepLimitExceeded(max_steps))
    }

    /// Queues bytes on the input port ahead of (or during) execution.
    pub fn feed_input(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.components.io_in.write(*byte);
        }
    }

    /// Everything written to the output port so far.
    pub fn output(&self) -> Vec<u8> {
        self.components.io_out.pending()
    }

    /// Read access to the components for observers and tests. Mutating the
    /// machine goes through [`step`](Processor::step) only.
    pub fn components(&self) -> &Components {
        &self.components
    }

    pub fn control_unit(&self) -> &ControlUnit {
        &self.cu
    }

    /// Peeks a memory cell without disturbing the address port.
    pub fn memory(&self, address: Word) -> Word {
        self.components.ram.cell(address)
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// A point-in-time value copy of the whole machine.
    pub fn snapshot(&self) -> CpuSnapshot {
        snapshot::capture(&self.components, &self.cu, self.cycles)
    }

    pub fn set_observer(&mut self, observer: Box<dyn StepObserver>) {
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }
}

impl Default for Processor {
    fn default() -> Processor {
        Processor::new()
    }
}
