//! # Addressing modes and operand resolution
//!
//! The 13 addressing modes of the 6502 and the resolver that maps an
//! instruction's operand bytes to an effective memory address.
//!
//! Resolution is a pure function of memory, the program counter (pointing at
//! the opcode byte), and the index registers. It never mutates state; the
//! dispatcher resolves first and hands the result to the instruction
//! handler. How many bytes the instruction occupies is *not* derived here -
//! each opcode table entry carries its own encoded length.

use crate::memory::MemoryBus;

/// How an instruction's operand bytes map to an effective address.
///
/// # Operand sizes
///
/// - **0 bytes**: `Implied`, `Accumulator`
/// - **1 byte**: `Immediate`, `ZeroPage`, `ZeroPageX`, `ZeroPageY`,
///   `Relative`, `IndirectX`, `IndirectY`
/// - **2 bytes**: `Absolute`, `AbsoluteX`, `AbsoluteY`, `Indirect`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the operation is implied by the opcode (TAX, PHA, NOP).
    Implied,

    /// Operates directly on the accumulator (ASL A, ROR A).
    Accumulator,

    /// 8-bit constant following the opcode (LDA #$10).
    Immediate,

    /// 8-bit address into page zero (LDA $80 reads 0x0080).
    ZeroPage,

    /// Zero-page address plus X, wrapping within page zero (LDA $80,X).
    ZeroPageX,

    /// Zero-page address plus Y, wrapping within page zero (LDX $80,Y).
    ZeroPageY,

    /// Signed 8-bit offset from the byte after the instruction; used only by
    /// branches (BEQ label).
    Relative,

    /// Full 16-bit little-endian address (LDA $1234).
    Absolute,

    /// 16-bit address plus X, wrapping at 0xFFFF (LDA $1234,X).
    AbsoluteX,

    /// 16-bit address plus Y, wrapping at 0xFFFF (LDA $1234,Y).
    AbsoluteY,

    /// 16-bit pointer dereferenced to a 16-bit address; used only by JMP.
    /// Replicates the hardware page-wrap bug when the pointer sits at the
    /// end of a page.
    Indirect,

    /// Indexed indirect: zero-page operand plus X locates a 16-bit pointer
    /// in page zero (LDA ($40,X)).
    IndirectX,

    /// Indirect indexed: zero-page operand locates a 16-bit pointer, then Y
    /// is added to the pointed-to address (LDA ($40),Y).
    IndirectY,
}

/// A resolved operand, ready for an instruction handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// The instruction takes no operand.
    Implied,

    /// The instruction reads and writes the accumulator directly.
    Accumulator,

    /// Effective memory location of the operand. For `Relative` this is the
    /// branch target. `page_crossed` reports whether indexing moved the
    /// address into a different 256-byte page than the unindexed base.
    Address { addr: u16, page_crossed: bool },
}

impl Operand {
    /// Effective address for instructions that reference memory.
    ///
    /// The opcode table never pairs a memory-referencing mnemonic with a
    /// register mode (checked in the table tests), so the other variants are
    /// unreachable here.
    pub(crate) fn address(self) -> u16 {
        match self {
            Operand::Address { addr, .. } => addr,
            _ => unreachable!("instruction requires a memory operand"),
        }
    }

    /// True when indexing crossed a page boundary.
    pub(crate) fn page_crossed(self) -> bool {
        matches!(
            self,
            Operand::Address {
                page_crossed: true,
                ..
            }
        )
    }
}

/// Resolves the operand of the instruction at `pc`.
///
/// `pc` points at the opcode byte; operand bytes follow it. The resolver
/// reads at most two bytes past the opcode and never writes.
pub(crate) fn resolve<M: MemoryBus>(
    memory: &M,
    pc: u16,
    x: u8,
    y: u8,
    mode: AddressingMode,
) -> Operand {
    let operand_pc = pc.wrapping_add(1);
    match mode {
        AddressingMode::Implied => Operand::Implied,
        AddressingMode::Accumulator => Operand::Accumulator,
        AddressingMode::Immediate => Operand::Address {
            addr: operand_pc,
            page_crossed: false,
        },
        AddressingMode::ZeroPage => Operand::Address {
            addr: memory.read(operand_pc) as u16,
            page_crossed: false,
        },
        AddressingMode::ZeroPageX => Operand::Address {
            addr: memory.read(operand_pc).wrapping_add(x) as u16,
            page_crossed: false,
        },
        AddressingMode::ZeroPageY => Operand::Address {
            addr: memory.read(operand_pc).wrapping_add(y) as u16,
            page_crossed: false,
        },
        AddressingMode::Relative => {
            let offset = memory.read(operand_pc) as i8;
            let base = pc.wrapping_add(2);
            let target = base.wrapping_add(offset as i16 as u16);
            Operand::Address {
                addr: target,
                page_crossed: crossed_page(base, target),
            }
        }
        AddressingMode::Absolute => Operand::Address {
            addr: read_u16(memory, operand_pc),
            page_crossed: false,
        },
        AddressingMode::AbsoluteX => indexed(read_u16(memory, operand_pc), x),
        AddressingMode::AbsoluteY => indexed(read_u16(memory, operand_pc), y),
        AddressingMode::Indirect => {
            let ptr = read_u16(memory, operand_pc);
            Operand::Address {
                addr: read_u16_page_wrapped(memory, ptr),
                page_crossed: false,
            }
        }
        AddressingMode::IndirectX => {
            let zp = memory.read(operand_pc).wrapping_add(x);
            Operand::Address {
                addr: read_u16_zero_page(memory, zp),
                page_crossed: false,
            }
        }
        AddressingMode::IndirectY => {
            let zp = memory.read(operand_pc);
            indexed(read_u16_zero_page(memory, zp), y)
        }
    }
}

fn indexed(base: u16, index: u8) -> Operand {
    let addr = base.wrapping_add(index as u16);
    Operand::Address {
        addr,
        page_crossed: crossed_page(base, addr),
    }
}

fn crossed_page(a: u16, b: u16) -> bool {
    a & 0xFF00 != b & 0xFF00
}

/// Reads a little-endian 16-bit value: low byte at `addr`, high byte at
/// `addr + 1`, both wrapping at the top of the address space.
pub(crate) fn read_u16<M: MemoryBus>(memory: &M, addr: u16) -> u16 {
    let lo = memory.read(addr) as u16;
    let hi = memory.read(addr.wrapping_add(1)) as u16;
    hi << 8 | lo
}

/// 16-bit read with the hardware JMP-indirect bug: when `addr` is the last
/// byte of a page, the high byte comes from the *start of the same page*
/// rather than the next one.
fn read_u16_page_wrapped<M: MemoryBus>(memory: &M, addr: u16) -> u16 {
    let lo = memory.read(addr) as u16;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = memory.read(hi_addr) as u16;
    hi << 8 | lo
}

/// 16-bit pointer read from page zero; the high byte wraps within page zero
/// (a pointer at 0xFF reads its high byte from 0x00).
fn read_u16_zero_page<M: MemoryBus>(memory: &M, zp: u8) -> u16 {
    let lo = memory.read(zp as u16) as u16;
    let hi = memory.read(zp.wrapping_add(1) as u16) as u16;
    hi << 8 | lo
}
