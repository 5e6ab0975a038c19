use crate::constants;
use crate::enums::ControlSignal;
use crate::error::Error;
use crate::Word;

/// The E flag, set only by CMP/CMI: true iff the accumulator equalled the
/// compared value. Conditional jumps read it.
#[derive(Clone, Debug)]
pub struct CmpFlag {
    value: bool,
    active: bool,
}

impl CmpFlag {
    pub fn new() -> CmpFlag {
        CmpFlag {
            value: false,
            active: false,
        }
    }

    pub fn read(&self) -> bool {
        self.value
    }

    pub fn write(&mut self, value: bool) {
        self.value = value;
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl Default for CmpFlag {
    fn default() -> CmpFlag {
        CmpFlag::new()
    }
}

/// The arithmetic logic unit. It is passive: the control unit arms a mode
/// with [`set_mode`](Alu::set_mode), supplies both inputs with
/// [`set_operands`](Alu::set_operands), then calls [`compute`](Alu::compute).
/// The result stays latched until the next operation, ready for an
/// `ACC <- ALU` transfer. There is no direct write path into the ALU.
#[derive(Clone, Debug)]
pub struct Alu {
    control: Option<ControlSignal>,
    acc: Word,
    operand: Word,
    result: Word,
    flag: CmpFlag,
    active: bool,
}

impl Alu {
    pub fn new() -> Alu {
        Alu {
            control: None,
            acc: 0,
            operand: 0,
            result: 0,
            flag: CmpFlag::new(),
            active: false,
        }
    }

    /// Arms the operation the next [`compute`](Alu::compute) performs.
    pub fn set_mode(&mut self, control: ControlSignal) {
        self.control = Some(control);
    }

    /// Supplies the accumulator value and the second operand.
    pub fn set_operands(&mut self, acc: Word, operand: Word) {
        self.acc = acc;
        self.operand = operand;
    }

    /// Executes the armed operation.
    ///
    /// ADD, SUB, AND, OR, XOR, LSL and LSR latch a result; CMP only updates
    /// the flag. Shift counts are the low byte of the operand, reduced
    /// modulo the word width. Any other (or unset) control is an error.
    pub fn compute(&mut self) -> Result<(), Error> {
        match self.control {
            Some(ControlSignal::ADD) => self.result = self.acc.wrapping_add(self.operand),
            Some(ControlSignal::SUB) => self.result = self.acc.wrapping_sub(self.operand),
            Some(ControlSignal::AND) => self.result = self.acc & self.operand,
            Some(ControlSignal::OR) => self.result = self.acc | self.operand,
            Some(ControlSignal::XOR) => self.result = self.acc ^ self.operand,
            Some(ControlSignal::LSL) => {
                let count = u32::from(self.operand & constants::OPERAND_MASK) % constants::WORD_SIZE;
                self.result = self.acc << count;
            }
            Some(ControlSignal::LSR) => {
                let count = u32::from(self.operand & constants::OPERAND_MASK) % constants::WORD_SIZE;
                self.result = self.acc >> count;
            }
            Some(ControlSignal::CMP) => {
                self.flag.write(self.acc == self.operand);
                self.flag.set_active(true);
            }
            _ => {
                return Err(Error::InvalidUse(
                    "ALU compute with invalid or unset control signal",
                ))
            }
        }
        Ok(())
    }

    /// The most recently latched result.
    pub fn read(&self) -> Word {
        self.result
    }

    pub fn control(&self) -> Option<ControlSignal> {
        self.control
    }

    pub fn acc_operand(&self) -> Word {
        self.acc
    }

    pub fn second_operand(&self) -> Word {
        self.operand
    }

    pub fn flag(&self) -> &CmpFlag {
        &self.flag
    }

    pub fn flag_mut(&mut self) -> &mut CmpFlag {
        &mut self.flag
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl Default for Alu {
    fn default() -> Alu {
        Alu::new()
    }
}
