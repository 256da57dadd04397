//! # Register Transfer Instructions
//!
//! This module implements register-to-register transfers: TAX, TAY, TXA,
//! TYA, TSX, TXS. All use implied addressing and execute in 2 cycles.
//! Every transfer except TXS sets Z and N from the copied value.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Advances PC and returns base cycles for an implied-mode transfer.
fn finish<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    cpu.x = cpu.a;
    let result = cpu.x;
    cpu.set_zn(result);
    finish(cpu, opcode)
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    cpu.y = cpu.a;
    let result = cpu.y;
    cpu.set_zn(result);
    finish(cpu, opcode)
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    cpu.a = cpu.x;
    let result = cpu.a;
    cpu.set_zn(result);
    finish(cpu, opcode)
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    cpu.a = cpu.y;
    let result = cpu.a;
    cpu.set_zn(result);
    finish(cpu, opcode)
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    cpu.x = cpu.sp;
    let result = cpu.x;
    cpu.set_zn(result);
    finish(cpu, opcode)
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// The only transfer that does not affect flags.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    cpu.sp = cpu.x;
    finish(cpu, opcode)
}
