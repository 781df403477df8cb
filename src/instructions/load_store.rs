//! Load and store instructions: LDA, LDX, LDY, STA, STX, STY.
//!
//! Loads update the Zero and Negative flags and pay the page-crossing
//! penalty on indexed modes. Stores affect no flags and always cost their
//! base cycles.

use crate::addressing::Operand;
use crate::cpu::CPU;
use crate::memory::MemoryBus;

pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.memory.read(operand.address());
    cpu.a = value;
    cpu.update_nz(value);
    if operand.page_crossed() {
        cpu.cycles += 1;
    }
}

pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.memory.read(operand.address());
    cpu.x = value;
    cpu.update_nz(value);
    if operand.page_crossed() {
        cpu.cycles += 1;
    }
}

pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.memory.read(operand.address());
    cpu.y = value;
    cpu.update_nz(value);
    if operand.page_crossed() {
        cpu.cycles += 1;
    }
}

pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.memory.write(operand.address(), cpu.a);
}

pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.memory.write(operand.address(), cpu.x);
}

pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.memory.write(operand.address(), cpu.y);
}
