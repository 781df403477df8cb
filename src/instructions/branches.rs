//! Conditional branches: BPL, BMI, BVC, BVS, BCC, BCS, BNE, BEQ.
//!
//! The eight branches differ only in which flag they test, so they share
//! one implementation. The resolver has already turned the signed offset
//! into an absolute target address.

use crate::addressing::Operand;
use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// Takes the branch when `taken` is set: PC is reassigned to the resolved
/// target, costing one extra cycle plus another if the target sits in a
/// different page than the instruction's end.
///
/// Returns true when PC was reassigned so the dispatcher skips its own
/// advance.
pub(crate) fn branch<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, taken: bool) -> bool {
    if !taken {
        return false;
    }
    cpu.pc = operand.address();
    cpu.cycles += 1;
    if operand.page_crossed() {
        cpu.cycles += 1;
    }
    true
}
