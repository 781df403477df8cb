//! Shift and rotate instructions: ASL, LSR, ROL, ROR.
//!
//! All four read the operand location (accumulator or memory), put the
//! ejected bit in Carry, write the result back to the same location, and
//! update Zero/Negative. The rotates additionally feed the previous Carry
//! into the vacated bit.

use crate::addressing::Operand;
use crate::cpu::CPU;
use crate::memory::MemoryBus;

pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |cpu, value| {
        cpu.flag_c = value & 0x80 != 0;
        value << 1
    });
}

pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |cpu, value| {
        cpu.flag_c = value & 0x01 != 0;
        value >> 1
    });
}

pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |cpu, value| {
        let carry_in = cpu.flag_c as u8;
        cpu.flag_c = value & 0x80 != 0;
        value << 1 | carry_in
    });
}

pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |cpu, value| {
        let carry_in = (cpu.flag_c as u8) << 7;
        cpu.flag_c = value & 0x01 != 0;
        value >> 1 | carry_in
    });
}

/// Shared read-modify-write cycle: fetch the value from the addressed
/// location, apply `f`, write the result back to the same location, and
/// update Zero/Negative from it.
fn modify<M, F>(cpu: &mut CPU<M>, operand: Operand, f: F)
where
    M: MemoryBus,
    F: FnOnce(&mut CPU<M>, u8) -> u8,
{
    match operand {
        Operand::Accumulator => {
            let value = cpu.a;
            let result = f(cpu, value);
            cpu.a = result;
            cpu.update_nz(result);
        }
        Operand::Address { addr, .. } => {
            let value = cpu.memory.read(addr);
            let result = f(cpu, value);
            cpu.memory.write(addr, result);
            cpu.update_nz(result);
        }
        // The opcode table only pairs shifts with Accumulator or memory
        // modes; checked in the table tests.
        Operand::Implied => unreachable!("shift requires an accumulator or memory operand"),
    }
}
