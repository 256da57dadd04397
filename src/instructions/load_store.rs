//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA / LDX / LDY: Load a register from memory (Z and N updated)
//! - STA / STX / STY: Store a register to memory (no flags)
//!
//! Loads with indexed addressing pay a one-cycle penalty when the access
//! crosses a page boundary; stores never do (their base cycle counts
//! already cover the fixup cycle).

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);

    cpu.a = value;
    cpu.set_zn(value);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles + page_crossed as u8
}

/// Executes the LDX (Load X Register) instruction. Z and N from the result.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);

    cpu.x = value;
    cpu.set_zn(value);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles + page_crossed as u8
}

/// Executes the LDY (Load Y Register) instruction. Z and N from the result.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);

    cpu.y = value;
    cpu.set_zn(value);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles + page_crossed as u8
}

/// Executes the STA (Store Accumulator) instruction. No flags affected.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.effective_address(metadata.addressing_mode);

    cpu.memory.write(addr, cpu.a);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}

/// Executes the STX (Store X Register) instruction. No flags affected.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.effective_address(metadata.addressing_mode);

    cpu.memory.write(addr, cpu.x);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}

/// Executes the STY (Store Y Register) instruction. No flags affected.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.effective_address(metadata.addressing_mode);

    cpu.memory.write(addr, cpu.y);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}
