//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//! - NOP: No operation
//!
//! JSR pushes the address of the last byte of the JSR instruction, and RTS
//! compensates by adding one after pulling. BRK pushes the address two
//! past the opcode so the handler can skip the padding byte that always
//! follows a BRK.

use crate::memory::IRQ_VECTOR;
use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Executes the JMP (Jump) instruction.
///
/// Sets the program counter to the effective address. The indirect form is
/// subject to the NMOS page-boundary bug, which the addressing decoder
/// reproduces: a pointer at 0xNNFF takes its high byte from 0xNN00.
///
/// Flags affected: none.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (target, _) = cpu.effective_address(metadata.addressing_mode);

    cpu.pc = target;
    metadata.base_cycles
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the JSR's last byte (PC + 2) to the stack, high
/// byte first, then jumps to the absolute target.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (target, _) = cpu.effective_address(metadata.addressing_mode);

    let return_address = cpu.pc.wrapping_add(2);
    cpu.push_stack((return_address >> 8) as u8);
    cpu.push_stack(return_address as u8);

    cpu.pc = target;
    metadata.base_cycles
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address (low byte first) and resumes one past it,
/// undoing JSR's minus-one convention.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let low = cpu.pull_stack() as u16;
    let high = cpu.pull_stack() as u16;
    cpu.pc = ((high << 8) | low).wrapping_add(1);

    metadata.base_cycles
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register (bits 4 and 5 of the pulled byte are
/// ignored), then the return address (low byte first). Unlike RTS, no
/// plus-one adjustment: interrupts push the exact resume address.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let status = cpu.pull_stack();
    cpu.set_status_from_pull(status);

    let low = cpu.pull_stack() as u16;
    let high = cpu.pull_stack() as u16;
    cpu.pc = (high << 8) | low;

    metadata.base_cycles
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK forces a software interrupt:
/// 1. Pushes PC + 2 to the stack, high byte first (BRK occupies one byte
///    but the following byte is treated as padding)
/// 2. Pushes the status register with the B flag and bit 5 set
/// 3. Sets the I (interrupt disable) flag
/// 4. Loads PC from the IRQ vector at 0xFFFE/0xFFFF
///
/// The live B flag stays clear; it is only set in the pushed copy.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let return_address = cpu.pc.wrapping_add(2);
    cpu.push_stack((return_address >> 8) as u8);
    cpu.push_stack(return_address as u8);

    cpu.push_stack(cpu.status() | 0b0011_0000);

    cpu.flag_i = true;
    cpu.pc = cpu.memory.read_word(IRQ_VECTOR);

    metadata.base_cycles
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles
}
