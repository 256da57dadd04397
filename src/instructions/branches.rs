//! # Branch Instructions
//!
//! This module implements the eight conditional branches: BCC, BCS, BEQ,
//! BNE, BMI, BPL, BVC, BVS.
//!
//! All branch instructions use relative addressing with a signed 8-bit
//! offset, interpreted relative to the PC one past the operand byte.
//! Cycle timing varies based on whether the branch is taken and whether
//! the taken branch crosses a page boundary.

use crate::{MemoryBus, Mnemonic, CPU, OPCODE_TABLE};

/// Executes a conditional branch.
///
/// The branch condition is derived from the opcode's mnemonic and tested
/// against the corresponding flag. If taken, PC becomes the Relative-mode
/// effective address (PC + 2 + sign-extended offset).
///
/// Cycle timing:
/// - 2 cycles if the branch is not taken
/// - 3 cycles if taken to the same page
/// - 4 cycles if taken across a page boundary
///
/// No flags are affected.
pub(crate) fn execute_branch<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let taken = match metadata.mnemonic {
        Mnemonic::BCC => !cpu.flag_c,
        Mnemonic::BCS => cpu.flag_c,
        Mnemonic::BEQ => cpu.flag_z,
        Mnemonic::BNE => !cpu.flag_z,
        Mnemonic::BMI => cpu.flag_n,
        Mnemonic::BPL => !cpu.flag_n,
        Mnemonic::BVC => !cpu.flag_v,
        Mnemonic::BVS => cpu.flag_v,
        other => unreachable!("not a branch mnemonic: {:?}", other),
    };

    // Resolve the target before moving PC; the page-crossed flag is
    // relative to the PC one past the operand byte.
    let (target, page_crossed) = cpu.effective_address(metadata.addressing_mode);
    let pc_after_instruction = cpu.pc.wrapping_add(metadata.size_bytes as u16);

    if taken {
        cpu.pc = target;
        metadata.base_cycles + 1 + page_crossed as u8
    } else {
        cpu.pc = pc_after_instruction;
        metadata.base_cycles
    }
}
