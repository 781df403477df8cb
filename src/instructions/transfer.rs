//! Register transfers: TAX, TAY, TSX, TXA, TXS, TYA.
//!
//! All update Zero/Negative from the destination except TXS, which moves X
//! into the stack pointer without touching any flag.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.a;
    cpu.update_nz(cpu.x);
}

pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.a;
    cpu.update_nz(cpu.y);
}

pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.sp;
    cpu.update_nz(cpu.x);
}

pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.x;
    cpu.update_nz(cpu.a);
}

pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp = cpu.x;
}

pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.y;
    cpu.update_nz(cpu.a);
}
