//! # Opcode table
//!
//! The 256-entry table mapping each opcode byte to its instruction metadata:
//! mnemonic, addressing mode, base cycle cost, and encoded length. The table
//! is the single source of truth for decoding - the dispatcher never infers
//! instruction length from the addressing mode, and a byte without an entry
//! is a decode fault.

use crate::addressing::AddressingMode;

/// Instruction mnemonics implemented by the core.
///
/// Covers loads, stores, register transfers, stack operations, shifts and
/// rotates, flag set/clear operations, JMP/NOP, and the conditional
/// branches. Arithmetic, compare, increment/decrement, and the
/// interrupt-related opcodes have no table entries and decode-fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    Pha,
    Php,
    Pla,
    Plp,
    Asl,
    Lsr,
    Rol,
    Ror,
    Clc,
    Sec,
    Cli,
    Sei,
    Clv,
    Cld,
    Sed,
    Jmp,
    Nop,
    Bpl,
    Bmi,
    Bvc,
    Bvs,
    Bcc,
    Bcs,
    Bne,
    Beq,
}

/// Static decoding metadata for one opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Which instruction this byte encodes.
    pub mnemonic: Mnemonic,

    /// How the operand bytes map to an effective address.
    pub mode: AddressingMode,

    /// Cycle cost before page-crossing or branch-taken penalties.
    pub base_cycles: u8,

    /// Total encoded length in bytes, opcode included. The dispatcher
    /// advances the program counter by this amount unless the handler
    /// reassigns it.
    pub size_bytes: u8,
}

/// Opcode metadata indexed by opcode byte. `None` entries decode-fault.
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

const fn entry(
    mnemonic: Mnemonic,
    mode: AddressingMode,
    base_cycles: u8,
    size_bytes: u8,
) -> Option<OpcodeMetadata> {
    Some(OpcodeMetadata {
        mnemonic,
        mode,
        base_cycles,
        size_bytes,
    })
}

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut t: [Option<OpcodeMetadata>; 256] = [None; 256];

    // Loads
    t[0xA9] = entry(Lda, Immediate, 2, 2);
    t[0xA5] = entry(Lda, ZeroPage, 3, 2);
    t[0xB5] = entry(Lda, ZeroPageX, 4, 2);
    t[0xAD] = entry(Lda, Absolute, 4, 3);
    t[0xBD] = entry(Lda, AbsoluteX, 4, 3);
    t[0xB9] = entry(Lda, AbsoluteY, 4, 3);
    t[0xA1] = entry(Lda, IndirectX, 6, 2);
    t[0xB1] = entry(Lda, IndirectY, 5, 2);

    t[0xA2] = entry(Ldx, Immediate, 2, 2);
    t[0xA6] = entry(Ldx, ZeroPage, 3, 2);
    t[0xB6] = entry(Ldx, ZeroPageY, 4, 2);
    t[0xAE] = entry(Ldx, Absolute, 4, 3);
    t[0xBE] = entry(Ldx, AbsoluteY, 4, 3);

    t[0xA0] = entry(Ldy, Immediate, 2, 2);
    t[0xA4] = entry(Ldy, ZeroPage, 3, 2);
    t[0xB4] = entry(Ldy, ZeroPageX, 4, 2);
    t[0xAC] = entry(Ldy, Absolute, 4, 3);
    t[0xBC] = entry(Ldy, AbsoluteX, 4, 3);

    // Stores
    t[0x85] = entry(Sta, ZeroPage, 3, 2);
    t[0x95] = entry(Sta, ZeroPageX, 4, 2);
    t[0x8D] = entry(Sta, Absolute, 4, 3);
    t[0x9D] = entry(Sta, AbsoluteX, 5, 3);
    t[0x99] = entry(Sta, AbsoluteY, 5, 3);
    t[0x81] = entry(Sta, IndirectX, 6, 2);
    t[0x91] = entry(Sta, IndirectY, 6, 2);

    t[0x86] = entry(Stx, ZeroPage, 3, 2);
    t[0x96] = entry(Stx, ZeroPageY, 4, 2);
    t[0x8E] = entry(Stx, Absolute, 4, 3);

    t[0x84] = entry(Sty, ZeroPage, 3, 2);
    t[0x94] = entry(Sty, ZeroPageX, 4, 2);
    t[0x8C] = entry(Sty, Absolute, 4, 3);

    // Register transfers
    t[0xAA] = entry(Tax, Implied, 2, 1);
    t[0xA8] = entry(Tay, Implied, 2, 1);
    t[0xBA] = entry(Tsx, Implied, 2, 1);
    t[0x8A] = entry(Txa, Implied, 2, 1);
    t[0x9A] = entry(Txs, Implied, 2, 1);
    t[0x98] = entry(Tya, Implied, 2, 1);

    // Stack
    t[0x48] = entry(Pha, Implied, 3, 1);
    t[0x08] = entry(Php, Implied, 3, 1);
    t[0x68] = entry(Pla, Implied, 4, 1);
    t[0x28] = entry(Plp, Implied, 4, 1);

    // Shifts and rotates
    t[0x0A] = entry(Asl, Accumulator, 2, 1);
    t[0x06] = entry(Asl, ZeroPage, 5, 2);
    t[0x16] = entry(Asl, ZeroPageX, 6, 2);
    t[0x0E] = entry(Asl, Absolute, 6, 3);
    t[0x1E] = entry(Asl, AbsoluteX, 7, 3);

    t[0x4A] = entry(Lsr, Accumulator, 2, 1);
    t[0x46] = entry(Lsr, ZeroPage, 5, 2);
    t[0x56] = entry(Lsr, ZeroPageX, 6, 2);
    t[0x4E] = entry(Lsr, Absolute, 6, 3);
    t[0x5E] = entry(Lsr, AbsoluteX, 7, 3);

    t[0x2A] = entry(Rol, Accumulator, 2, 1);
    t[0x26] = entry(Rol, ZeroPage, 5, 2);
    t[0x36] = entry(Rol, ZeroPageX, 6, 2);
    t[0x2E] = entry(Rol, Absolute, 6, 3);
    t[0x3E] = entry(Rol, AbsoluteX, 7, 3);

    t[0x6A] = entry(Ror, Accumulator, 2, 1);
    t[0x66] = entry(Ror, ZeroPage, 5, 2);
    t[0x76] = entry(Ror, ZeroPageX, 6, 2);
    t[0x6E] = entry(Ror, Absolute, 6, 3);
    t[0x7E] = entry(Ror, AbsoluteX, 7, 3);

    // Flag operations
    t[0x18] = entry(Clc, Implied, 2, 1);
    t[0x38] = entry(Sec, Implied, 2, 1);
    t[0x58] = entry(Cli, Implied, 2, 1);
    t[0x78] = entry(Sei, Implied, 2, 1);
    t[0xB8] = entry(Clv, Implied, 2, 1);
    t[0xD8] = entry(Cld, Implied, 2, 1);
    t[0xF8] = entry(Sed, Implied, 2, 1);

    // Control
    t[0x4C] = entry(Jmp, Absolute, 3, 3);
    t[0x6C] = entry(Jmp, Indirect, 5, 3);
    t[0xEA] = entry(Nop, Implied, 2, 1);

    // Conditional branches
    t[0x10] = entry(Bpl, Relative, 2, 2);
    t[0x30] = entry(Bmi, Relative, 2, 2);
    t[0x50] = entry(Bvc, Relative, 2, 2);
    t[0x70] = entry(Bvs, Relative, 2, 2);
    t[0x90] = entry(Bcc, Relative, 2, 2);
    t[0xB0] = entry(Bcs, Relative, 2, 2);
    t[0xD0] = entry(Bne, Relative, 2, 2);
    t[0xF0] = entry(Beq, Relative, 2, 2);

    t
}
