//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//! - **Interrupt lines**: level-triggered IRQ, edge-triggered NMI latch
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: Execute one instruction (or service one pending interrupt)
//!   and return the cycles consumed
//! - `run_for_cycles()`: Execute until a cycle budget is exhausted
//!
//! Interrupt lines are sampled at the start of each `step`: a pending NMI is
//! serviced first, then IRQ if the I flag is clear. Each service sequence
//! costs 7 cycles.

use crate::addressing::AddressingMode;
use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::memory::{MemoryBus, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK_PAGE};
use crate::opcodes::{Mnemonic, OPCODE_TABLE};
use crate::ExecutionError;

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags,
/// program counter, stack pointer, interrupt lines, and cycle counter. It is
/// generic over the memory implementation via the `MemoryBus` trait and owns
/// its bus for the lifetime of the emulation.
///
/// # Examples
///
/// ```
/// use nes6502::{CPU, FlatMemory, MemoryBus};
///
/// // Create memory and set reset vector
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Initialize CPU - loads PC from the reset vector
/// let mut cpu = CPU::new(memory);
///
/// // Inspect initial state
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.flag_i(), true); // Interrupt disable set on reset
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 | sp gives the full stack address)
    pub(crate) sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Break flag (only meaningful in the status copy pushed by BRK)
    pub(crate) flag_b: bool,

    /// Decimal mode flag (stored but ignored; the 2A03 has no BCD unit)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag (blocks IRQ when set)
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow/underflow)
    pub(crate) flag_c: bool,

    /// Level-triggered IRQ line, asserted by the host between steps
    irq_line: bool,

    /// Edge-triggered NMI latch, set by `trigger_nmi` and cleared on service
    nmi_pending: bool,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and performs a reset.
    ///
    /// The CPU comes up in the 6502 power-on reset state:
    /// - Program counter (PC) is loaded from the reset vector at
    ///   0xFFFC/0xFFFD (little-endian)
    /// - Stack pointer (SP) is set to 0xFD
    /// - Status register has the Interrupt Disable flag set (I = true)
    /// - All other registers (A, X, Y) are zeroed
    /// - Cycle counter is reset to 0
    ///
    /// The host must populate the reset vector before construction, or
    /// accept that PC starts at whatever the bus reads there (0x0000 for a
    /// fresh `FlatMemory`).
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFD,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: true,
            flag_z: false,
            flag_c: false,
            irq_line: false,
            nmi_pending: false,
            cycles: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Resets the CPU to the power-on state.
    ///
    /// Loads PC from the reset vector, sets SP to 0xFD, sets the I flag,
    /// zeroes A, X, and Y, and lowers both interrupt lines. Unlike IRQ and
    /// NMI, reset pushes nothing to the stack.
    pub fn reset(&mut self) {
        self.pc = self.memory.read_word(RESET_VECTOR);
        self.sp = 0xFD;
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.flag_n = false;
        self.flag_v = false;
        self.flag_b = false;
        self.flag_d = false;
        self.flag_i = true;
        self.flag_z = false;
        self.flag_c = false;
        self.irq_line = false;
        self.nmi_pending = false;
        self.cycles = 0;
    }

    /// Executes one instruction or services one pending interrupt.
    ///
    /// Interrupt lines are sampled first: a pending NMI is serviced before
    /// anything else, then IRQ if the I flag is clear. Otherwise the CPU
    /// performs one fetch-decode-execute cycle:
    ///
    /// 1. Fetch opcode byte at current PC
    /// 2. Look up instruction metadata in the opcode table
    /// 3. Resolve the effective address per the addressing mode
    /// 4. Execute, updating registers, flags, PC, and memory
    ///
    /// # Returns
    ///
    /// - `Ok(cycles)` - the cycles consumed, including page-crossing and
    ///   branch-taken penalties (7 for a serviced interrupt)
    /// - `Err(ExecutionError::IllegalOpcode { .. })` if the fetched byte is
    ///   not a documented opcode; PC has advanced past the byte and two
    ///   cycles have been charged
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step().unwrap(), 2);
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        // NMI wins over IRQ; the latch clears once serviced so a new edge
        // is required for the next one.
        if self.nmi_pending {
            self.nmi_pending = false;
            return Ok(self.interrupt(NMI_VECTOR));
        }

        // IRQ is level-triggered: the host line and the bus devices are
        // OR'd together, and the interrupt fires each step while held.
        if (self.irq_line || self.memory.irq_active()) && !self.flag_i {
            return Ok(self.interrupt(IRQ_VECTOR));
        }

        let pc = self.pc;
        let opcode = self.memory.read(pc);
        let metadata = &OPCODE_TABLE[opcode as usize];

        let cycles = match metadata.mnemonic {
            // Loads and stores
            Mnemonic::LDA => load_store::execute_lda(self, opcode),
            Mnemonic::LDX => load_store::execute_ldx(self, opcode),
            Mnemonic::LDY => load_store::execute_ldy(self, opcode),
            Mnemonic::STA => load_store::execute_sta(self, opcode),
            Mnemonic::STX => load_store::execute_stx(self, opcode),
            Mnemonic::STY => load_store::execute_sty(self, opcode),

            // Arithmetic and logic
            Mnemonic::ADC => alu::execute_adc(self, opcode),
            Mnemonic::SBC => alu::execute_sbc(self, opcode),
            Mnemonic::AND => alu::execute_and(self, opcode),
            Mnemonic::ORA => alu::execute_ora(self, opcode),
            Mnemonic::EOR => alu::execute_eor(self, opcode),
            Mnemonic::BIT => alu::execute_bit(self, opcode),
            Mnemonic::CMP => alu::execute_cmp(self, opcode),
            Mnemonic::CPX => alu::execute_cpx(self, opcode),
            Mnemonic::CPY => alu::execute_cpy(self, opcode),

            // Shifts and rotates
            Mnemonic::ASL => shifts::execute_asl(self, opcode),
            Mnemonic::LSR => shifts::execute_lsr(self, opcode),
            Mnemonic::ROL => shifts::execute_rol(self, opcode),
            Mnemonic::ROR => shifts::execute_ror(self, opcode),

            // Increments and decrements
            Mnemonic::INC => inc_dec::execute_inc(self, opcode),
            Mnemonic::DEC => inc_dec::execute_dec(self, opcode),
            Mnemonic::INX => inc_dec::execute_inx(self, opcode),
            Mnemonic::INY => inc_dec::execute_iny(self, opcode),
            Mnemonic::DEX => inc_dec::execute_dex(self, opcode),
            Mnemonic::DEY => inc_dec::execute_dey(self, opcode),

            // Branches (condition evaluated against the relevant flag)
            Mnemonic::BCC
            | Mnemonic::BCS
            | Mnemonic::BEQ
            | Mnemonic::BNE
            | Mnemonic::BMI
            | Mnemonic::BPL
            | Mnemonic::BVC
            | Mnemonic::BVS => branches::execute_branch(self, opcode),

            // Control flow
            Mnemonic::JMP => control::execute_jmp(self, opcode),
            Mnemonic::JSR => control::execute_jsr(self, opcode),
            Mnemonic::RTS => control::execute_rts(self, opcode),
            Mnemonic::RTI => control::execute_rti(self, opcode),
            Mnemonic::BRK => control::execute_brk(self, opcode),
            Mnemonic::NOP => control::execute_nop(self, opcode),

            // Stack operations
            Mnemonic::PHA => stack::execute_pha(self, opcode),
            Mnemonic::PHP => stack::execute_php(self, opcode),
            Mnemonic::PLA => stack::execute_pla(self, opcode),
            Mnemonic::PLP => stack::execute_plp(self, opcode),

            // Flag operations
            Mnemonic::CLC => flags::execute_clc(self, opcode),
            Mnemonic::SEC => flags::execute_sec(self, opcode),
            Mnemonic::CLI => flags::execute_cli(self, opcode),
            Mnemonic::SEI => flags::execute_sei(self, opcode),
            Mnemonic::CLV => flags::execute_clv(self, opcode),
            Mnemonic::CLD => flags::execute_cld(self, opcode),
            Mnemonic::SED => flags::execute_sed(self, opcode),

            // Register transfers
            Mnemonic::TAX => transfer::execute_tax(self, opcode),
            Mnemonic::TAY => transfer::execute_tay(self, opcode),
            Mnemonic::TXA => transfer::execute_txa(self, opcode),
            Mnemonic::TYA => transfer::execute_tya(self, opcode),
            Mnemonic::TSX => transfer::execute_tsx(self, opcode),
            Mnemonic::TXS => transfer::execute_txs(self, opcode),

            Mnemonic::Illegal => {
                // Advance past the byte so a host that ignores the error
                // keeps making progress.
                self.pc = pc.wrapping_add(metadata.size_bytes as u16);
                self.cycles += metadata.base_cycles as u64;
                return Err(ExecutionError::IllegalOpcode { opcode, pc });
            }
        };

        self.cycles += cycles as u64;
        Ok(cycles)
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted or an
    /// error occurs. Returns the actual number of cycles consumed (may be
    /// slightly more than the budget due to instruction granularity).
    ///
    /// This is useful for frame-locked execution models where the CPU must
    /// run for an exact number of cycles per frame (e.g., 29780 cycles per
    /// 60Hz NTSC frame).
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Sets the level-triggered IRQ line.
    ///
    /// While the line is asserted and the I flag is clear, an interrupt is
    /// serviced at the start of every `step`. The host must deassert the
    /// line once its device has been acknowledged.
    pub fn assert_irq(&mut self, asserted: bool) {
        self.irq_line = asserted;
    }

    /// Latches an NMI edge.
    ///
    /// The NMI is serviced at the start of the next `step` regardless of
    /// the I flag, and the latch clears once serviced; a new call is
    /// required for the next interrupt.
    pub fn trigger_nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Services an interrupt: pushes PC and status (B clear, bit 5 set),
    /// sets I, and loads PC from the vector. Costs 7 cycles.
    fn interrupt(&mut self, vector: u16) -> u8 {
        self.push_stack((self.pc >> 8) as u8);
        self.push_stack(self.pc as u8);
        self.push_stack(self.status() & !0b0001_0000);
        self.flag_i = true;
        self.pc = self.memory.read_word(vector);
        self.cycles += 7;
        7
    }

    // ========== Addressing Decoder ==========

    /// Resolves the effective address for an addressing mode that names a
    /// memory location, along with a page-crossed flag for the modes that
    /// can incur a read penalty (AbsoluteX, AbsoluteY, IndirectY, Relative).
    ///
    /// PC must still point at the opcode byte; operands are read from PC+1
    /// and PC+2. The decoder never mutates CPU state.
    pub(crate) fn effective_address(&self, mode: AddressingMode) -> (u16, bool) {
        match mode {
            AddressingMode::Immediate => (self.pc.wrapping_add(1), false),

            AddressingMode::ZeroPage => (self.operand_byte() as u16, false),

            // Indexed zero-page wraps within page zero, never crossing out
            AddressingMode::ZeroPageX => (self.operand_byte().wrapping_add(self.x) as u16, false),
            AddressingMode::ZeroPageY => (self.operand_byte().wrapping_add(self.y) as u16, false),

            AddressingMode::Absolute => (self.operand_word(), false),

            AddressingMode::AbsoluteX => {
                let base = self.operand_word();
                let addr = base.wrapping_add(self.x as u16);
                (addr, page_crossed(base, addr))
            }

            AddressingMode::AbsoluteY => {
                let base = self.operand_word();
                let addr = base.wrapping_add(self.y as u16);
                (addr, page_crossed(base, addr))
            }

            AddressingMode::Relative => {
                // Offset is relative to the address one past the operand
                let offset = self.operand_byte() as i8;
                let base = self.pc.wrapping_add(2);
                let target = base.wrapping_add_signed(offset as i16);
                (target, page_crossed(base, target))
            }

            AddressingMode::Indirect => {
                let ptr = self.operand_word();
                // NMOS 6502 bug: the pointer's high byte is fetched without
                // carrying into the pointer's own high byte, so a pointer at
                // 0xNNFF wraps to 0xNN00.
                let low = self.memory.read(ptr) as u16;
                let high_addr = if ptr & 0x00FF == 0x00FF {
                    ptr & 0xFF00
                } else {
                    ptr.wrapping_add(1)
                };
                let high = self.memory.read(high_addr) as u16;
                ((high << 8) | low, false)
            }

            AddressingMode::IndirectX => {
                let ptr = self.operand_byte().wrapping_add(self.x);
                (self.read_word_zero_page(ptr), false)
            }

            AddressingMode::IndirectY => {
                let base = self.read_word_zero_page(self.operand_byte());
                let addr = base.wrapping_add(self.y as u16);
                (addr, page_crossed(base, addr))
            }

            AddressingMode::Implicit | AddressingMode::Accumulator => {
                unreachable!("addressing mode {:?} has no effective address", mode)
            }
        }
    }

    /// Reads the operand value for the given mode, plus the page-crossed
    /// flag. Accumulator mode yields the A register.
    pub(crate) fn get_operand_value(&self, mode: AddressingMode) -> (u8, bool) {
        match mode {
            AddressingMode::Accumulator => (self.a, false),
            _ => {
                let (addr, page_crossed) = self.effective_address(mode);
                (self.memory.read(addr), page_crossed)
            }
        }
    }

    /// First operand byte (at PC+1).
    fn operand_byte(&self) -> u8 {
        self.memory.read(self.pc.wrapping_add(1))
    }

    /// 16-bit little-endian operand (at PC+1 and PC+2).
    fn operand_word(&self) -> u16 {
        self.memory.read_word(self.pc.wrapping_add(1))
    }

    /// Reads a 16-bit pointer from page zero; the second byte wraps within
    /// the page, so a pointer at 0xFF takes its high byte from 0x00.
    fn read_word_zero_page(&self, ptr: u8) -> u16 {
        let low = self.memory.read(ptr as u16) as u16;
        let high = self.memory.read(ptr.wrapping_add(1) as u16) as u16;
        (high << 8) | low
    }

    // ========== Stack and Flag Helpers ==========

    /// Pushes a byte to the stack page and decrements SP (wrapping).
    pub(crate) fn push_stack(&mut self, value: u8) {
        self.memory.write(STACK_PAGE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping) and reads the byte it now points at.
    pub(crate) fn pull_stack(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_PAGE | self.sp as u16)
    }

    /// Sets the Z and N flags from a result byte.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }

    /// Restores flags from a byte pulled off the stack (PLP, RTI).
    ///
    /// Bit 4 (B) and bit 5 (unused) of the pulled byte are ignored: the
    /// live B flag stays clear and bit 5 reads as 1 on the next push.
    pub(crate) fn set_status_from_pull(&mut self, value: u8) {
        self.flag_n = value & 0b1000_0000 != 0;
        self.flag_v = value & 0b0100_0000 != 0;
        self.flag_b = false;
        self.flag_d = value & 0b0000_1000 != 0;
        self.flag_i = value & 0b0000_0100 != 0;
        self.flag_z = value & 0b0000_0010 != 0;
        self.flag_c = value & 0b0000_0001 != 0;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: the full stack address is 0x0100 | SP. The stack grows
    /// downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000; // Bit 5 always 1

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Returns the total number of CPU cycles executed since reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Test Harness / Debugger Support ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}

/// True if `a` and `b` live on different 256-byte pages.
fn page_crossed(a: u16, b: u16) -> bool {
    a & 0xFF00 != b & 0xFF00
}
