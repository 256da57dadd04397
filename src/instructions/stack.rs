//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA / PLA: Push and pull the accumulator
//! - PHP / PLP: Push and pull the processor status
//!
//! The 6502 stack lives at 0x0100-0x01FF and grows downward; the stack
//! pointer is an 8-bit offset into that page and wraps on overflow. A
//! pushed status byte always has bit 5 set and, for PHP, the B flag set;
//! a pulled status byte has bits 4 and 5 ignored.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Executes the PHA (Push Accumulator) instruction. No flags affected.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.push_stack(cpu.a);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy has the B flag and bit 5 set, like the copy pushed by
/// BRK. The live flags are unchanged.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.push_stack(cpu.status() | 0b0011_0000);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}

/// Executes the PLA (Pull Accumulator) instruction. Z and N from the
/// pulled value.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.pull_stack();
    cpu.a = value;
    cpu.set_zn(value);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Bits 4 (B) and 5 (unused) of the pulled byte are ignored; all other
/// flags are restored.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.pull_stack();
    cpu.set_status_from_pull(value);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}
