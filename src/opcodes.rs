//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that
//! serves as the single source of truth for all 6502 instruction
//! information.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - Marked with `Mnemonic::Illegal`
//!
//! Each opcode entry includes the mnemonic tag, the addressing mode, the
//! base cycle cost (excluding page-crossing and branch-taken penalties),
//! and the instruction size in bytes. Execution dispatches on the mnemonic
//! and address resolution dispatches on the addressing mode, so the two
//! stay orthogonal.

use crate::addressing::AddressingMode;

/// The 56 documented 6502 instruction mnemonics, plus `Illegal` for the
/// 105 undocumented opcode bytes.
#[allow(clippy::upper_case_acronyms)]
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS, CLC,
    CLD, CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX, INY, JMP,
    JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA, PLP, ROL, ROR, RTI,
    RTS, SBC, SEC, SED, SEI, STA, STX, STY, TAX, TAY, TSX, TXA, TXS, TYA,
    /// Undocumented opcode byte; decoding one is an execution error.
    Illegal,
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use nes6502::{OPCODE_TABLE, AddressingMode, Mnemonic};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::LDA);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic tag.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page-crossing and branch penalties).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands, 1-3).
    pub size_bytes: u8,
}

/// Builds a table entry; the size is derived from the addressing mode so
/// the two can never disagree.
const fn op(mnemonic: Mnemonic, addressing_mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        size_bytes: addressing_mode.operand_bytes() + 1,
    }
}

/// Entry for undocumented opcode bytes. Charged like a 2-cycle NOP so a
/// host that ignores decode errors still advances.
const ILLEGAL: OpcodeMetadata = op(Mnemonic::Illegal, AddressingMode::Implicit, 2);

use AddressingMode::{
    Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implicit, Indirect, IndirectX,
    IndirectY, Relative, ZeroPage, ZeroPageX, ZeroPageY,
};
use Mnemonic::{
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS, CLC, CLD, CLI, CLV, CMP, CPX,
    CPY, DEC, DEX, DEY, EOR, INC, INX, INY, JMP, JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA,
    PLP, ROL, ROR, RTI, RTS, SBC, SEC, SED, SEI, STA, STX, STY, TAX, TAY, TSX, TXA, TXS, TYA,
};

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// Laid out as the 16x16 datasheet matrix (row = high nibble, column = low
/// nibble) for easy cross-checking against the canonical 6502 reference.
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00-0x0F
    op(BRK, Implicit, 7),  op(ORA, IndirectX, 6), ILLEGAL,               ILLEGAL,
    ILLEGAL,               op(ORA, ZeroPage, 3),  op(ASL, ZeroPage, 5),  ILLEGAL,
    op(PHP, Implicit, 3),  op(ORA, Immediate, 2), op(ASL, Accumulator, 2), ILLEGAL,
    ILLEGAL,               op(ORA, Absolute, 4),  op(ASL, Absolute, 6),  ILLEGAL,
    // 0x10-0x1F
    op(BPL, Relative, 2),  op(ORA, IndirectY, 5), ILLEGAL,               ILLEGAL,
    ILLEGAL,               op(ORA, ZeroPageX, 4), op(ASL, ZeroPageX, 6), ILLEGAL,
    op(CLC, Implicit, 2),  op(ORA, AbsoluteY, 4), ILLEGAL,               ILLEGAL,
    ILLEGAL,               op(ORA, AbsoluteX, 4), op(ASL, AbsoluteX, 7), ILLEGAL,
    // 0x20-0x2F
    op(JSR, Absolute, 6),  op(AND, IndirectX, 6), ILLEGAL,               ILLEGAL,
    op(BIT, ZeroPage, 3),  op(AND, ZeroPage, 3),  op(ROL, ZeroPage, 5),  ILLEGAL,
    op(PLP, Implicit, 4),  op(AND, Immediate, 2), op(ROL, Accumulator, 2), ILLEGAL,
    op(BIT, Absolute, 4),  op(AND, Absolute, 4),  op(ROL, Absolute, 6),  ILLEGAL,
    // 0x30-0x3F
    op(BMI, Relative, 2),  op(AND, IndirectY, 5), ILLEGAL,               ILLEGAL,
    ILLEGAL,               op(AND, ZeroPageX, 4), op(ROL, ZeroPageX, 6), ILLEGAL,
    op(SEC, Implicit, 2),  op(AND, AbsoluteY, 4), ILLEGAL,               ILLEGAL,
    ILLEGAL,               op(AND, AbsoluteX, 4), op(ROL, AbsoluteX, 7), ILLEGAL,
    // 0x40-0x4F
    op(RTI, Implicit, 6),  op(EOR, IndirectX, 6), ILLEGAL,               ILLEGAL,
    ILLEGAL,               op(EOR, ZeroPage, 3),  op(LSR, ZeroPage, 5),  ILLEGAL,
    op(PHA, Implicit, 3),  op(EOR, Immediate, 2), op(LSR, Accumulator, 2), ILLEGAL,
    op(JMP, Absolute, 3),  op(EOR, Absolute, 4),  op(LSR, Absolute, 6),  ILLEGAL,
    // 0x50-0x5F
    op(BVC, Relative, 2),  op(EOR, IndirectY, 5), ILLEGAL,               ILLEGAL,
    ILLEGAL,               op(EOR, ZeroPageX, 4), op(LSR, ZeroPageX, 6), ILLEGAL,
    op(CLI, Implicit, 2),  op(EOR, AbsoluteY, 4), ILLEGAL,               ILLEGAL,
    ILLEGAL,               op(EOR, AbsoluteX, 4), op(LSR, AbsoluteX, 7), ILLEGAL,
    // 0x60-0x6F
    op(RTS, Implicit, 6),  op(ADC, IndirectX, 6), ILLEGAL,               ILLEGAL,
    ILLEGAL,               op(ADC, ZeroPage, 3),  op(ROR, ZeroPage, 5),  ILLEGAL,
    op(PLA, Implicit, 4),  op(ADC, Immediate, 2), op(ROR, Accumulator, 2), ILLEGAL,
    op(JMP, Indirect, 5),  op(ADC, Absolute, 4),  op(ROR, Absolute, 6),  ILLEGAL,
    // 0x70-0x7F
    op(BVS, Relative, 2),  op(ADC, IndirectY, 5), ILLEGAL,               ILLEGAL,
    ILLEGAL,               op(ADC, ZeroPageX, 4), op(ROR, ZeroPageX, 6), ILLEGAL,
    op(SEI, Implicit, 2),  op(ADC, AbsoluteY, 4), ILLEGAL,               ILLEGAL,
    ILLEGAL,               op(ADC, AbsoluteX, 4), op(ROR, AbsoluteX, 7), ILLEGAL,
    // 0x80-0x8F
    ILLEGAL,               op(STA, IndirectX, 6), ILLEGAL,               ILLEGAL,
    op(STY, ZeroPage, 3),  op(STA, ZeroPage, 3),  op(STX, ZeroPage, 3),  ILLEGAL,
    op(DEY, Implicit, 2),  ILLEGAL,               op(TXA, Implicit, 2),  ILLEGAL,
    op(STY, Absolute, 4),  op(STA, Absolute, 4),  op(STX, Absolute, 4),  ILLEGAL,
    // 0x90-0x9F
    op(BCC, Relative, 2),  op(STA, IndirectY, 6), ILLEGAL,               ILLEGAL,
    op(STY, ZeroPageX, 4), op(STA, ZeroPageX, 4), op(STX, ZeroPageY, 4), ILLEGAL,
    op(TYA, Implicit, 2),  op(STA, AbsoluteY, 5), op(TXS, Implicit, 2),  ILLEGAL,
    ILLEGAL,               op(STA, AbsoluteX, 5), ILLEGAL,               ILLEGAL,
    // 0xA0-0xAF
    op(LDY, Immediate, 2), op(LDA, IndirectX, 6), op(LDX, Immediate, 2), ILLEGAL,
    op(LDY, ZeroPage, 3),  op(LDA, ZeroPage, 3),  op(LDX, ZeroPage, 3),  ILLEGAL,
    op(TAY, Implicit, 2),  op(LDA, Immediate, 2), op(TAX, Implicit, 2),  ILLEGAL,
    op(LDY, Absolute, 4),  op(LDA, Absolute, 4),  op(LDX, Absolute, 4),  ILLEGAL,
    // 0xB0-0xBF
    op(BCS, Relative, 2),  op(LDA, IndirectY, 5), ILLEGAL,               ILLEGAL,
    op(LDY, ZeroPageX, 4), op(LDA, ZeroPageX, 4), op(LDX, ZeroPageY, 4), ILLEGAL,
    op(CLV, Implicit, 2),  op(LDA, AbsoluteY, 4), op(TSX, Implicit, 2),  ILLEGAL,
    op(LDY, AbsoluteX, 4), op(LDA, AbsoluteX, 4), op(LDX, AbsoluteY, 4), ILLEGAL,
    // 0xC0-0xCF
    op(CPY, Immediate, 2), op(CMP, IndirectX, 6), ILLEGAL,               ILLEGAL,
    op(CPY, ZeroPage, 3),  op(CMP, ZeroPage, 3),  op(DEC, ZeroPage, 5),  ILLEGAL,
    op(INY, Implicit, 2),  op(CMP, Immediate, 2), op(DEX, Implicit, 2),  ILLEGAL,
    op(CPY, Absolute, 4),  op(CMP, Absolute, 4),  op(DEC, Absolute, 6),  ILLEGAL,
    // 0xD0-0xDF
    op(BNE, Relative, 2),  op(CMP, IndirectY, 5), ILLEGAL,               ILLEGAL,
    ILLEGAL,               op(CMP, ZeroPageX, 4), op(DEC, ZeroPageX, 6), ILLEGAL,
    op(CLD, Implicit, 2),  op(CMP, AbsoluteY, 4), ILLEGAL,               ILLEGAL,
    ILLEGAL,               op(CMP, AbsoluteX, 4), op(DEC, AbsoluteX, 7), ILLEGAL,
    // 0xE0-0xEF
    op(CPX, Immediate, 2), op(SBC, IndirectX, 6), ILLEGAL,               ILLEGAL,
    op(CPX, ZeroPage, 3),  op(SBC, ZeroPage, 3),  op(INC, ZeroPage, 5),  ILLEGAL,
    op(INX, Implicit, 2),  op(SBC, Immediate, 2), op(NOP, Implicit, 2),  ILLEGAL,
    op(CPX, Absolute, 4),  op(SBC, Absolute, 4),  op(INC, Absolute, 6),  ILLEGAL,
    // 0xF0-0xFF
    op(BEQ, Relative, 2),  op(SBC, IndirectY, 5), ILLEGAL,               ILLEGAL,
    ILLEGAL,               op(SBC, ZeroPageX, 4), op(INC, ZeroPageX, 6), ILLEGAL,
    op(SED, Implicit, 2),  op(SBC, AbsoluteY, 4), ILLEGAL,               ILLEGAL,
    ILLEGAL,               op(SBC, AbsoluteX, 4), op(INC, AbsoluteX, 7), ILLEGAL,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        let documented = OPCODE_TABLE
            .iter()
            .filter(|m| m.mnemonic != Mnemonic::Illegal)
            .count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn test_size_matches_addressing_mode() {
        for metadata in OPCODE_TABLE.iter() {
            assert_eq!(
                metadata.size_bytes,
                metadata.addressing_mode.operand_bytes() + 1
            );
        }
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(OPCODE_TABLE[0x00].mnemonic, Mnemonic::BRK);
        assert_eq!(OPCODE_TABLE[0x00].base_cycles, 7);

        assert_eq!(OPCODE_TABLE[0x29].mnemonic, Mnemonic::AND);
        assert_eq!(OPCODE_TABLE[0x29].addressing_mode, AddressingMode::Immediate);

        assert_eq!(OPCODE_TABLE[0x6C].mnemonic, Mnemonic::JMP);
        assert_eq!(OPCODE_TABLE[0x6C].addressing_mode, AddressingMode::Indirect);
        assert_eq!(OPCODE_TABLE[0x6C].base_cycles, 5);

        assert_eq!(OPCODE_TABLE[0xEA].mnemonic, Mnemonic::NOP);
        assert_eq!(OPCODE_TABLE[0xEA].base_cycles, 2);
    }
}
