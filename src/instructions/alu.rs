//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND / ORA / EOR: Bitwise logic on the accumulator
//! - CMP / CPX / CPY: Register comparisons
//! - BIT: Bit test
//!
//! Decimal mode is stored but ignored: the NES 2A03 has no BCD unit, so
//! ADC and SBC are always binary.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Adds `value` plus the carry flag to the accumulator, updating C, V, Z,
/// and N. Shared by ADC and SBC (which adds the one's complement).
fn add_to_accumulator<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = if cpu.flag_c { 1u16 } else { 0 };

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    // Carry: unsigned overflow out of bit 7
    cpu.flag_c = result16 > 0xFF;

    // Overflow: both operands had the same sign but the result's differs.
    // V = (A^result) & (M^result) & 0x80
    cpu.flag_v = ((a ^ result) & (value ^ result) & 0x80) != 0;

    cpu.a = result;
    cpu.set_zn(result);
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the value at the effective address plus the carry flag to the
/// accumulator.
///
/// # Flag Behavior
///
/// - Carry (C): Set on unsigned overflow (sum > 255)
/// - Overflow (V): Set on signed overflow
/// - Zero (Z) / Negative (N): From the result
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);

    add_to_accumulator(cpu, value);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles + page_crossed as u8
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Defined as ADC of the one's complement of the operand: carry set means
/// "no borrow". Produces identical flags to the equivalent ADC.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);

    add_to_accumulator(cpu, !value);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles + page_crossed as u8
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);

    let result = cpu.a & value;
    cpu.a = result;
    cpu.set_zn(result);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles + page_crossed as u8
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);

    let result = cpu.a | value;
    cpu.a = result;
    cpu.set_zn(result);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles + page_crossed as u8
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);

    let result = cpu.a ^ value;
    cpu.a = result;
    cpu.set_zn(result);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles + page_crossed as u8
}

/// Executes the BIT (Bit Test) instruction.
///
/// ANDs the accumulator with memory to set Z, then copies bits 7 and 6 of
/// the memory operand into N and V. The accumulator is unchanged.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, _) = cpu.get_operand_value(metadata.addressing_mode);

    cpu.flag_z = cpu.a & value == 0;
    cpu.flag_n = value & 0b1000_0000 != 0;
    cpu.flag_v = value & 0b0100_0000 != 0;

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}

/// Compares `register` against the operand: C set if register >= operand,
/// Z if equal, N from bit 7 of the difference. No register is written.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, register: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);

    let result = register.wrapping_sub(value);
    cpu.flag_c = register >= value;
    cpu.set_zn(result);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles + page_crossed as u8
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let register = cpu.a;
    compare(cpu, opcode, register)
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let register = cpu.x;
    compare(cpu, opcode, register)
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let register = cpu.y;
    compare(cpu, opcode, register)
}
