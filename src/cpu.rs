//! # CPU state and execution
//!
//! The [`CPU`] struct owns the register file, status flags, cycle counter,
//! and the memory bus, and drives the fetch-decode-execute loop.
//!
//! ## Execution model
//!
//! `step()` executes exactly one instruction:
//!
//! 1. fetch the opcode byte at PC;
//! 2. look it up in [`OPCODE_TABLE`]; a missing entry is a
//!    [`ExecutionError::DecodeFault`] and nothing else happens;
//! 3. resolve the operand through the addressing mode (read-only);
//! 4. run the one handler for the mnemonic;
//! 5. advance PC by the entry's encoded length, unless the handler
//!    reassigned PC (taken branch, JMP);
//! 6. charge the entry's base cycle cost. Handlers add page-crossing and
//!    branch-taken penalties themselves.
//!
//! Execution is single-threaded and synchronous; an instruction is the
//! smallest unit of cancellation, and callers wanting to observe state do so
//! between `step()` calls.

use crate::addressing::{self, Operand};
use crate::instructions::{branches, control, flags, load_store, shifts, stack, transfer};
use crate::memory::MemoryBus;
use crate::opcodes::{Mnemonic, OPCODE_TABLE};
use crate::ExecutionError;

/// 6502 CPU state and execution context, generic over the memory backend.
///
/// # Examples
///
/// ```
/// use nmos6502::{FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // reset vector low byte
/// memory.write(0xFFFD, 0x80); // reset vector high byte
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i());
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of the next opcode byte)
    pub(crate) pc: u16,

    /// Stack pointer; the full stack address is 0x0100 | SP
    pub(crate) sp: u8,

    /// Negative flag (bit 7 of the last result)
    pub(crate) flag_n: bool,

    /// Overflow flag
    pub(crate) flag_v: bool,

    /// Break flag
    pub(crate) flag_b: bool,

    /// Decimal mode flag (only the bit is modeled, not BCD arithmetic)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Zero flag
    pub(crate) flag_z: bool,

    /// Carry flag
    pub(crate) flag_c: bool,

    /// Total cycles charged since reset
    pub(crate) cycles: u64,

    /// Memory bus
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU in the power-on reset state.
    ///
    /// PC is loaded from the little-endian reset vector at 0xFFFC/0xFFFD,
    /// SP starts at 0xFD, the interrupt-disable flag is set, and everything
    /// else is zeroed. The memory image (vector included) must be populated
    /// before this call.
    pub fn new(memory: M) -> Self {
        let pc = addressing::read_u16(&memory, 0xFFFC);
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc,
            sp: 0xFD,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: true,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            memory,
        }
    }

    /// Executes exactly one instruction.
    ///
    /// Returns a [`ExecutionError::DecodeFault`] when the byte at PC has no
    /// opcode table entry. On fault no state changes - the same `step()`
    /// call will keep faulting until the driver intervenes.
    ///
    /// # Examples
    ///
    /// ```
    /// use nmos6502::{ExecutionError, FlatMemory, MemoryBus, CPU};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.write(0xFFFC, 0x00);
    /// memory.write(0xFFFD, 0x80);
    /// memory.load(0x8000, &[0xA9, 0x80]); // LDA #$80
    ///
    /// let mut cpu = CPU::new(memory);
    /// cpu.step().unwrap();
    /// assert_eq!(cpu.a(), 0x80);
    /// assert!(cpu.flag_n());
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let opcode = self.memory.read(self.pc);
        let metadata =
            OPCODE_TABLE[opcode as usize].ok_or(ExecutionError::DecodeFault(opcode))?;

        let operand = addressing::resolve(&self.memory, self.pc, self.x, self.y, metadata.mode);
        let pc_assigned = self.execute(metadata.mnemonic, operand);

        if !pc_assigned {
            self.pc = self.pc.wrapping_add(metadata.size_bytes as u16);
        }
        self.cycles += metadata.base_cycles as u64;

        Ok(())
    }

    /// Runs instructions until at least `cycle_budget` cycles have been
    /// charged or a fault surfaces.
    ///
    /// Returns the cycles actually consumed, which may overshoot the budget
    /// by the tail of the final instruction. This is the external-halt
    /// surface for frame-locked drivers; a driver that wants run-until-fault
    /// simply loops `step()`.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start = self.cycles;
        let target = start + cycle_budget;
        while self.cycles < target {
            self.step()?;
        }
        Ok(self.cycles - start)
    }

    /// Dispatches to the single handler for `mnemonic`.
    ///
    /// Returns true when the handler reassigned PC, in which case the
    /// dispatcher must not advance it again.
    fn execute(&mut self, mnemonic: Mnemonic, operand: Operand) -> bool {
        match mnemonic {
            Mnemonic::Lda => load_store::lda(self, operand),
            Mnemonic::Ldx => load_store::ldx(self, operand),
            Mnemonic::Ldy => load_store::ldy(self, operand),
            Mnemonic::Sta => load_store::sta(self, operand),
            Mnemonic::Stx => load_store::stx(self, operand),
            Mnemonic::Sty => load_store::sty(self, operand),

            Mnemonic::Tax => transfer::tax(self),
            Mnemonic::Tay => transfer::tay(self),
            Mnemonic::Tsx => transfer::tsx(self),
            Mnemonic::Txa => transfer::txa(self),
            Mnemonic::Txs => transfer::txs(self),
            Mnemonic::Tya => transfer::tya(self),

            Mnemonic::Pha => stack::pha(self),
            Mnemonic::Php => stack::php(self),
            Mnemonic::Pla => stack::pla(self),
            Mnemonic::Plp => stack::plp(self),

            Mnemonic::Asl => shifts::asl(self, operand),
            Mnemonic::Lsr => shifts::lsr(self, operand),
            Mnemonic::Rol => shifts::rol(self, operand),
            Mnemonic::Ror => shifts::ror(self, operand),

            Mnemonic::Clc => flags::clc(self),
            Mnemonic::Sec => flags::sec(self),
            Mnemonic::Cli => flags::cli(self),
            Mnemonic::Sei => flags::sei(self),
            Mnemonic::Clv => flags::clv(self),
            Mnemonic::Cld => flags::cld(self),
            Mnemonic::Sed => flags::sed(self),

            Mnemonic::Nop => return false,
            Mnemonic::Jmp => {
                control::jmp(self, operand);
                return true;
            }

            Mnemonic::Bpl => {
                let taken = !self.flag_n;
                return branches::branch(self, operand, taken);
            }
            Mnemonic::Bmi => {
                let taken = self.flag_n;
                return branches::branch(self, operand, taken);
            }
            Mnemonic::Bvc => {
                let taken = !self.flag_v;
                return branches::branch(self, operand, taken);
            }
            Mnemonic::Bvs => {
                let taken = self.flag_v;
                return branches::branch(self, operand, taken);
            }
            Mnemonic::Bcc => {
                let taken = !self.flag_c;
                return branches::branch(self, operand, taken);
            }
            Mnemonic::Bcs => {
                let taken = self.flag_c;
                return branches::branch(self, operand, taken);
            }
            Mnemonic::Bne => {
                let taken = !self.flag_z;
                return branches::branch(self, operand, taken);
            }
            Mnemonic::Beq => {
                let taken = self.flag_z;
                return branches::branch(self, operand, taken);
            }
        }
        false
    }

    /// Sets the Zero and Negative flags from `value`.
    ///
    /// Every instruction that lands a value in a register (load, transfer,
    /// pull, shift, rotate) goes through here.
    pub(crate) fn update_nz(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }

    /// Pushes a byte: write at 0x0100 | SP, then decrement SP.
    ///
    /// SP wraps from 0x00 to 0xFF silently; the stack page is just memory
    /// and overflow is the program's problem, as on hardware.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(0x0100 | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pulls a byte: increment SP, then read from 0x0100 | SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(0x0100 | self.sp as u16)
    }

    // ========== Registers ==========

    /// Accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Stack pointer. The full stack address is 0x0100 | SP; the stack grows
    /// downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Cycles charged since reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    // ========== Status register ==========

    /// Packs the flags into the status byte.
    ///
    /// Bit layout `NV1BDIZC` (bit 7 down to bit 0); bit 5 is not a flag and
    /// always reads as 1.
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000;
        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }
        status
    }

    /// Unpacks a status byte into the seven flags. Bit 5 is ignored.
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = value & 0b1000_0000 != 0;
        self.flag_v = value & 0b0100_0000 != 0;
        self.flag_b = value & 0b0001_0000 != 0;
        self.flag_d = value & 0b0000_1000 != 0;
        self.flag_i = value & 0b0000_0100 != 0;
        self.flag_z = value & 0b0000_0010 != 0;
        self.flag_c = value & 0b0000_0001 != 0;
    }

    // ========== Flags ==========

    /// Negative flag.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Overflow flag.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Break flag.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Decimal mode flag.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Interrupt disable flag.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Zero flag.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Carry flag.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    // ========== Memory ==========

    /// Shared access to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus, for loaders and test setup.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}
