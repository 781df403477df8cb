//! # NMOS 6502 instruction-execution core
//!
//! The execution core of a 6502-class emulator: a byte-addressable 64 KiB
//! memory space behind the [`MemoryBus`] trait, the CPU register file and
//! status flags, a pure addressing-mode resolver, and a table-driven
//! fetch-decode-execute loop.
//!
//! ## Quick start
//!
//! ```rust
//! use nmos6502::{FlatMemory, MemoryBus, CPU};
//!
//! let mut memory = FlatMemory::new();
//!
//! // Reset vector at 0xFFFC/0xFFFD names the initial program counter.
//! memory.write(0xFFFC, 0x00);
//! memory.write(0xFFFD, 0x80);
//!
//! // LDA #$42 at the program start.
//! memory.load(0x8000, &[0xA9, 0x42]);
//!
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//!
//! cpu.step().unwrap();
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(cpu.pc(), 0x8002);
//! ```
//!
//! ## Architecture
//!
//! - `memory` - the [`MemoryBus`] trait and the [`FlatMemory`] flat-RAM
//!   implementation. All address arithmetic wraps modulo 65536; there are no
//!   bus errors.
//! - `addressing` - the [`AddressingMode`] enumeration and the resolver that
//!   turns an instruction's operand bytes into an effective address.
//! - `opcodes` - the 256-entry [`OPCODE_TABLE`] mapping each opcode byte to
//!   its mnemonic, addressing mode, base cycle cost, and encoded length.
//!   Bytes without an entry raise [`ExecutionError::DecodeFault`].
//! - `cpu` - the [`CPU`] state struct and the `step()` dispatch loop.
//!
//! Program loading, disassembly, device I/O, and interrupt delivery are
//! collaborator concerns and live outside this crate.

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;

// Per-mnemonic instruction handlers (not part of the public API).
mod instructions;

pub use addressing::AddressingMode;
pub use cpu::CPU;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};

use thiserror::Error;

/// Errors surfaced by the fetch-decode-execute loop.
///
/// Address wraparound is *not* an error: all address and register arithmetic
/// wraps modulo its width by design.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// The opcode byte at the program counter has no entry in the opcode
    /// table.
    ///
    /// The fault is raised before any state is written, so the program
    /// counter, registers, flags, memory, and cycle counter are exactly as
    /// they were when `step()` was called. Whether to halt, skip, or inspect
    /// is the driver's decision.
    #[error("opcode 0x{0:02X} does not decode to any instruction")]
    DecodeFault(u8),
}
