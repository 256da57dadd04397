//! Property-based tests over the addressing decoder, exercised through
//! loads.

use nes6502::{CPU, FlatMemory, MemoryBus};
use proptest::prelude::*;

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    for (i, byte) in program.iter().enumerate() {
        memory.write(0x8000 + i as u16, *byte);
    }
    CPU::new(memory)
}

proptest! {
    /// Indexed zero-page addressing stays within page zero for any
    /// operand/index pair.
    #[test]
    fn zero_page_x_wraps(operand in any::<u8>(), x in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu(&[0xB5, operand]); // LDA operand,X
        cpu.set_x(x);

        let effective = operand.wrapping_add(x) as u16;
        cpu.memory_mut().write(effective, value);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Absolute,X reads the right cell and charges the page-cross penalty
    /// exactly when the indexed address leaves the base page.
    #[test]
    fn absolute_x_address_and_cycles(
        lo in any::<u8>(),
        hi in 0x01u8..0x7E,
        x in any::<u8>(),
        value in any::<u8>(),
    ) {
        let mut cpu = setup_cpu(&[0xBD, lo, hi]); // LDA base,X
        cpu.set_x(x);

        let base = (hi as u16) << 8 | lo as u16;
        let effective = base.wrapping_add(x as u16);
        cpu.memory_mut().write(effective, value);

        let cycles = cpu.step().unwrap();

        let crossed = base & 0xFF00 != effective & 0xFF00;
        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cycles, 4 + crossed as u8);
    }

    /// (Indirect),Y follows the zero-page pointer (high byte wrapping
    /// within the page) and charges the penalty on a page cross.
    #[test]
    fn indirect_indexed_follows_pointer(
        pointer in any::<u8>(),
        lo in any::<u8>(),
        hi in 0x01u8..0x7E,
        y in any::<u8>(),
        value in any::<u8>(),
    ) {
        let mut cpu = setup_cpu(&[0xB1, pointer]); // LDA (pointer),Y
        cpu.set_y(y);

        cpu.memory_mut().write(pointer as u16, lo);
        cpu.memory_mut().write(pointer.wrapping_add(1) as u16, hi);

        let base = (hi as u16) << 8 | lo as u16;
        let effective = base.wrapping_add(y as u16);
        cpu.memory_mut().write(effective, value);

        let cycles = cpu.step().unwrap();

        let crossed = base & 0xFF00 != effective & 0xFF00;
        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cycles, 5 + crossed as u8);
    }

    /// (Indirect,X) wraps the pointer arithmetic within page zero.
    #[test]
    fn indexed_indirect_wraps_pointer(
        operand in any::<u8>(),
        x in any::<u8>(),
        value in any::<u8>(),
    ) {
        let mut cpu = setup_cpu(&[0xA1, operand]); // LDA (operand,X)
        cpu.set_x(x);

        let pointer = operand.wrapping_add(x);
        // Point at a fixed cell well away from page zero and the program
        cpu.memory_mut().write(pointer as u16, 0x50);
        cpu.memory_mut().write(pointer.wrapping_add(1) as u16, 0x01);
        cpu.memory_mut().write(0x0150, value);

        let cycles = cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cycles, 6);
    }

    /// Branch targets are measured from the end of the branch instruction.
    #[test]
    fn branch_target_arithmetic(offset in any::<u8>()) {
        let mut cpu = setup_cpu(&[0x18, 0x90, offset]); // CLC; BCC offset
        cpu.step().unwrap(); // CLC so the branch takes

        cpu.step().unwrap();

        let expected = 0x8003u16.wrapping_add_signed(offset as i8 as i16);
        prop_assert_eq!(cpu.pc(), expected);
    }

    /// A taken branch costs 3 cycles on the same page, 4 across pages.
    #[test]
    fn branch_cycle_penalties(offset in any::<u8>()) {
        let mut cpu = setup_cpu(&[0xD0, offset]); // BNE offset (Z clear)

        let cycles = cpu.step().unwrap();

        let target = 0x8002u16.wrapping_add_signed(offset as i8 as i16);
        let crossed = target & 0xFF00 != 0x8000;
        prop_assert_eq!(cpu.pc(), target);
        prop_assert_eq!(cycles, 3 + crossed as u8);
    }
}
