//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor
//! status flags: CLC, SEC, CLI, SEI, CLV, CLD, SED.
//!
//! These instructions use implied addressing mode and execute in 2 cycles.
//! CLD and SED toggle the decimal flag even though the 2A03 ignores it
//! during arithmetic.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Advances PC and returns base cycles for an implied-mode flag op.
fn finish<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    cpu.flag_c = false;
    finish(cpu, opcode)
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    cpu.flag_c = true;
    finish(cpu, opcode)
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    cpu.flag_i = false;
    finish(cpu, opcode)
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    cpu.flag_i = true;
    finish(cpu, opcode)
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    cpu.flag_v = false;
    finish(cpu, opcode)
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    cpu.flag_d = false;
    finish(cpu, opcode)
}

/// Executes the SED (Set Decimal Mode) instruction.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    cpu.flag_d = true;
    finish(cpu, opcode)
}
