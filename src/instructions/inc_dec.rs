//! # Increment and Decrement Instructions
//!
//! This module implements INC and DEC (memory read-modify-write) and the
//! register forms INX, INY, DEX, DEY. All wrap modulo 256 and set Z and N
//! from the result.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.effective_address(metadata.addressing_mode);

    let result = cpu.memory.read(addr).wrapping_add(1);
    cpu.memory.write(addr, result);
    cpu.set_zn(result);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.effective_address(metadata.addressing_mode);

    let result = cpu.memory.read(addr).wrapping_sub(1);
    cpu.memory.write(addr, result);
    cpu.set_zn(result);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.x = cpu.x.wrapping_add(1);
    let result = cpu.x;
    cpu.set_zn(result);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.y = cpu.y.wrapping_add(1);
    let result = cpu.y;
    cpu.set_zn(result);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.x = cpu.x.wrapping_sub(1);
    let result = cpu.x;
    cpu.set_zn(result);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.y = cpu.y.wrapping_sub(1);
    let result = cpu.y;
    cpu.set_zn(result);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}
