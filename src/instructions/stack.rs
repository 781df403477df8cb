//! Stack operations: PHA, PHP, PLA, PLP.
//!
//! The stack lives at 0x0100-0x01FF, addressed by 0x0100 | SP and growing
//! downward: a push writes then decrements SP, a pull increments SP then
//! reads. SP wraps silently in both directions - over- and underflow are
//! not faults, the pointer just walks around the page.
//!
//! PHP pushes the packed status byte, whose unused bit 5 always reads 1.
//! PLP unpacks every flag from the pulled byte.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let a = cpu.a;
    cpu.push(a);
}

pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.status();
    cpu.push(status);
}

pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull();
    cpu.a = value;
    cpu.update_nz(value);
}

pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull();
    cpu.set_status(value);
}
