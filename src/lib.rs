//! # NES 6502 CPU Emulator Core
//!
//! A cycle-accurate emulator for the MOS 6502 microprocessor as used in the
//! Nintendo Entertainment System (the Ricoh 2A03 variant, which has no
//! binary-coded-decimal arithmetic).
//!
//! This crate provides the CPU interpreter only: CPU state, a trait-based
//! memory bus abstraction, a table-driven opcode decoder, and the
//! fetch-decode-execute engine including reset, IRQ, and NMI handling.
//! Peripheral NES subsystems (PPU, APU, cartridge mappers, controllers) are
//! external collaborators the CPU talks to only through its memory bus.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes6502::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // Load a tiny program: LDA #$42
//! memory.write(0x8000, 0xA9);
//! memory.write(0x8001, 0x42);
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//!
//! // Execute one instruction; step returns the cycles consumed
//! let cycles = cpu.step().unwrap();
//! assert_eq!(cycles, 2);
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory implementation via
//!   the `MemoryBus` trait
//! - **Cycle Accuracy**: every `step` reports the cycles consumed, including
//!   page-crossing and branch-taken penalties
//! - **Table-Driven Design**: all opcode metadata lives in a single
//!   256-entry table; execution dispatches on the mnemonic tag and address
//!   resolution dispatches on the addressing-mode tag
//!
//! ## Modules
//!
//! - `cpu` - CPU state, interrupts, and execution logic
//! - `memory` - MemoryBus trait, vector constants, and FlatMemory
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing mode enumeration

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::CPU;
pub use memory::{FlatMemory, MemoryBus, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK_PAGE};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched byte is not a documented 6502 opcode.
    ///
    /// Carries the offending opcode byte and the address it was fetched
    /// from. The CPU has already advanced PC past the byte and charged two
    /// cycles, so a host that chooses to ignore the error keeps making
    /// progress.
    IllegalOpcode {
        /// The undocumented opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: u16,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::IllegalOpcode { opcode, pc } => {
                write!(f, "Illegal opcode 0x{:02X} at 0x{:04X}", opcode, pc)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
