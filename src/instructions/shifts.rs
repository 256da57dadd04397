//! # Shift and Rotate Instructions
//!
//! This module implements ASL, LSR, ROL, and ROR. Each operates either on
//! the accumulator (Accumulator mode) or on memory with a read-modify-write
//! sequence. The carry flag receives the bit shifted out; rotates feed the
//! old carry in on the other end. Z and N are set from the result.
//!
//! Read-modify-write forms never pay a page-crossing penalty; their base
//! cycle counts already include the fixup cycle.

use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Reads the shift operand, applies `f` (old value, old carry) -> (result,
/// new carry), writes the result back to the accumulator or memory, and
/// updates C, Z, and N.
fn read_modify_write<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
    f: fn(u8, bool) -> (u8, bool),
) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        let (result, carry) = f(cpu.a, cpu.flag_c);
        cpu.a = result;
        cpu.flag_c = carry;
        result
    } else {
        let (addr, _) = cpu.effective_address(metadata.addressing_mode);
        let (result, carry) = f(cpu.memory.read(addr), cpu.flag_c);
        cpu.memory.write(addr, result);
        cpu.flag_c = carry;
        result
    };
    cpu.set_zn(result);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Shifts left one bit; bit 7 goes to carry, bit 0 is filled with zero.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    read_modify_write(cpu, opcode, |value, _| (value << 1, value & 0x80 != 0))
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Shifts right one bit; bit 0 goes to carry, bit 7 is filled with zero
/// (so N is always cleared).
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    read_modify_write(cpu, opcode, |value, _| (value >> 1, value & 0x01 != 0))
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Shifts left one bit; the old carry fills bit 0 and bit 7 becomes the
/// new carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    read_modify_write(cpu, opcode, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Shifts right one bit; the old carry fills bit 7 and bit 0 becomes the
/// new carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    read_modify_write(cpu, opcode, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    })
}
