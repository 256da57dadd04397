//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from
//! specific memory implementations. This enables flexible memory
//! configurations including:
//!
//! - Flat 64KB RAM (FlatMemory implementation provided)
//! - The real NES memory map (RAM mirroring, PPU/APU registers, cartridge)
//! - Debugging wrappers with logging
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads may return garbage
//! - Writes to ROM/unmapped regions may be ignored

/// Reset vector: PC is loaded from 0xFFFC (low) / 0xFFFD (high) on reset.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// NMI vector: PC is loaded from 0xFFFA/0xFFFB when an NMI is serviced.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// IRQ/BRK vector: PC is loaded from 0xFFFE/0xFFFF on IRQ or BRK.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base address of the stack page (0x0100-0x01FF).
///
/// The stack pointer is an 8-bit offset into this page; the full stack
/// address is `STACK_PAGE | sp`.
pub const STACK_PAGE: u16 = 0x0100;

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// The CPU accesses all memory (RAM, ROM, I/O) through this abstraction.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use nes6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// // Write a value
/// mem.write(0x1234, 0x42);
///
/// // Read it back
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use nes6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. If the address is unmapped or invalid,
    /// implementations may return garbage data (matching 6502 hardware
    /// behavior).
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. If the address is read-only or
    /// unmapped, implementations may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word starting at `addr`.
    ///
    /// The second byte is read from `addr + 1` with 16-bit wraparound, so a
    /// word read at 0xFFFF takes its high byte from 0x0000.
    fn read_word(&self, addr: u16) -> u16 {
        let low = self.read(addr) as u16;
        let high = self.read(addr.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Checks if the IRQ (Interrupt Request) line is active.
    ///
    /// The IRQ line on the 6502 is level-sensitive and shared among all
    /// devices: it is active while ANY device has a pending interrupt. The
    /// CPU samples this at the start of each `step` and services the
    /// interrupt if the I flag is clear.
    ///
    /// The default implementation returns `false` for simple memories (like
    /// `FlatMemory`) with no interrupt-capable devices. Memory mappers with
    /// such devices should override this.
    fn irq_active(&self) -> bool {
        false
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to a single contiguous
/// RAM array initialized to 0x00, so locations never written read as zero.
///
/// Useful for testing and for simple programs that don't need the real NES
/// memory map.
///
/// # Examples
///
/// ```
/// use nes6502::{CPU, FlatMemory, MemoryBus};
///
/// // Create memory and set up reset vector
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
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
