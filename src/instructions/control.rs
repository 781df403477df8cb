//! Control flow: JMP (absolute and indirect).
//!
//! JMP reassigns PC outright; the dispatcher sees the override and does not
//! advance again. The indirect form inherits the page-wrap bug from the
//! addressing resolver.

use crate::addressing::Operand;
use crate::cpu::CPU;
use crate::memory::MemoryBus;

pub(crate) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.pc = operand.address();
}
