//! Value snapshots of the machine, captured between steps for observers.

use crate::control::{Components, ControlUnit};
use crate::enums::{ComponentName, ControlSignal, CyclePhase};
use crate::register::Register;
use crate::Word;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterView {
    pub name: ComponentName,
    pub value: Word,
    pub control: Option<ControlSignal>,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AluView {
    pub control: Option<ControlSignal>,
    pub acc_operand: Word,
    pub second_operand: Word,
    pub result: Word,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagView {
    pub set: bool,
    pub active: bool,
}

/// The memory as seen from outside: the address port and the one cell it
/// currently selects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryView {
    pub address: Word,
    pub data: Word,
    pub address_active: bool,
    pub data_active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortView {
    pub pending: Vec<u8>,
    pub awaiting: bool,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusView {
    pub connections: Vec<(ComponentName, ComponentName)>,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CuView {
    pub phase: CyclePhase,
    pub instruction: Option<Word>,
    pub opcode: u8,
    pub operand: u8,
    pub step_index: usize,
    pub step_count: usize,
    pub current_step: Option<String>,
    pub last_step: Option<String>,
    pub disassembly: String,
}

/// One immutable view of the entire machine, sufficient to redraw a display
/// without touching the processor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub mar: RegisterView,
    pub mdr: RegisterView,
    pub pc: RegisterView,
    pub cir: RegisterView,
    pub acc: RegisterView,
    pub ix: RegisterView,
    pub alu: AluView,
    pub flag: FlagView,
    pub memory: MemoryView,
    pub input: PortView,
    pub output: PortView,
    pub inner_data_bus: BusView,
    pub address_bus: BusView,
    pub cu: CuView,
    pub cycles: u64,
}

fn register_view(register: &Register) -> RegisterView {
    RegisterView {
        name: register.name(),
        value: register.value(),
        control: register.control(),
        active: register.active(),
    }
}

pub(crate) fn capture(components: &Components, cu: &ControlUnit, cycles: u64) -> CpuSnapshot {
    CpuSnapshot {
        mar: register_view(&components.mar),
        mdr: register_view(&components.mdr),
        pc: register_view(&components.pc),
        cir: register_view(&components.cir),
        acc: register_view(&components.acc),
        ix: register_view(&components.ix),
        alu: AluView {
            control: components.alu.control(),
            acc_operand: components.alu.acc_operand(),
            second_operand: components.alu.second_operand(),
            result: components.alu.read(),
            active: components.alu.active(),
        },
        flag: FlagView {
            set: components.alu.flag().read(),
            active: components.alu.flag().active(),
        },
        memory: MemoryView {
            address: components.ram.address().value(),
            data: components.ram.cell(components.ram.address().value()),
            address_active: components.ram.address().active(),
            data_active: components.ram.active(),
        },
        input: PortView {
            pending: components.io_in.pending(),
            awaiting: components.io_in.awaiting(),
            active: components.io_in.active(),
        },
        output: PortView {
            pending: components.io_out.pending(),
            awaiting: components.io_out.awaiting(),
            active: components.io_out.active(),
        },
        inner_data_bus: BusView {
            connections: components.inner_data_bus.connections().to_vec(),
            active: components.inner_data_bus.active(),
        },
        address_bus: BusView {
            connections: components.address_bus.connections().to_vec(),
            active: components.address_bus.active(),
        },
        cu: CuView {
            phase: cu.phase(),
            instruction: cu.instruction(),
            opcode: cu.opcode(),
            operand: cu.operand(),
            step_index: cu.sequence_index(),
            step_count: cu.sequence().len(),
            current_step: cu.current_step().map(|step| step.to_string()),
            last_step: cu.last_step().map(|step| step.to_string()),
            disassembly: cu.disassembly(components),
        },
        cycles,
    }
}
