//! # Memory bus abstraction
//!
//! The [`MemoryBus`] trait decouples the CPU from the memory implementation,
//! so the same core can drive flat RAM, ROM/RAM splits, or memory-mapped
//! device regions. [`FlatMemory`] is the provided 64 KiB flat-RAM backend.
//!
//! The trait follows 6502 hardware behavior: there is no bus error
//! mechanism, reads and writes always succeed, and every address in
//! 0x0000-0xFFFF is reachable. Wraparound happens in address *arithmetic*
//! (`u16::wrapping_add` and friends); the bus itself only ever sees in-range
//! addresses.

/// Byte-level read/write access to the 16-bit address space.
///
/// The CPU performs every memory access - instruction fetch, operand
/// resolution, stack traffic - through this trait.
///
/// # Examples
///
/// ```
/// use nmos6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads the byte at `addr`.
    ///
    /// Must never panic. Implementations backing unmapped regions may return
    /// any value, matching hardware open-bus behavior.
    fn read(&self, addr: u16) -> u8;

    /// Writes `value` to `addr`.
    ///
    /// Must never panic. Implementations may ignore writes to read-only
    /// regions.
    fn write(&mut self, addr: u16, value: u8);
}

/// 64 KiB of flat, zero-initialized RAM.
///
/// Every address in 0x0000-0xFFFF is writable. This is the memory backend
/// used by the test suites and is suitable for any program that does not
/// need a ROM/RAM split or device mappings.
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new instance with all 65536 bytes set to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `origin`.
    ///
    /// Writes wrap past 0xFFFF back to 0x0000, like every other address
    /// computation in the core. Intended for loaders populating a program
    /// image (including the reset vector) before execution starts.
    ///
    /// # Examples
    ///
    /// ```
    /// use nmos6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x8000, &[0xA9, 0x01, 0x8D, 0x00, 0x02]);
    /// assert_eq!(mem.read(0x8000), 0xA9);
    /// assert_eq!(mem.read(0x8004), 0x02);
    /// ```
    pub fn load(&mut self, origin: u16, bytes: &[u8]) {
        let mut addr = origin;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
