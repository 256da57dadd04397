//! Tests for CPU initialization and reset behavior.

use nes6502::{CPU, FlatMemory, MemoryBus};

#[test]
fn test_new_loads_pc_from_reset_vector() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x34);
    memory.write(0xFFFD, 0x12);

    let cpu = CPU::new(memory);

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_i());
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_unpopulated_reset_vector_starts_at_zero() {
    // A host that never writes the vector gets PC = 0x0000, since unwritten
    // memory reads as zero.
    let cpu = CPU::new(FlatMemory::new());
    assert_eq!(cpu.pc(), 0x0000);
}

#[test]
fn test_stepping_from_zeroed_state_is_defined() {
    // All-zero memory means BRK at 0x0000 with an all-zero IRQ vector: the
    // CPU pushes and lands back at 0x0000. Nothing panics.
    let mut cpu = CPU::new(FlatMemory::new());

    let cycles = cpu.step().unwrap();
    assert_eq!(cycles, 7);
    assert_eq!(cpu.pc(), 0x0000);
    assert_eq!(cpu.sp(), 0xFA); // three pushes
}

#[test]
fn test_reset_reloads_vector_and_clears_registers() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0x8000, 0xA2); // LDX #$55
    memory.write(0x8001, 0x55);

    let mut cpu = CPU::new(memory);
    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x55);
    assert_eq!(cpu.pc(), 0x8002);

    cpu.reset();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag_i());
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_reset_does_not_push_to_stack() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);

    let mut cpu = CPU::new(memory);
    cpu.reset();

    // The stack page is untouched
    for addr in 0x0100..=0x01FF {
        assert_eq!(cpu.memory().read(addr), 0x00);
    }
}

#[test]
fn test_reset_lowers_interrupt_lines() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0x8000, 0xEA); // NOP

    let mut cpu = CPU::new(memory);
    cpu.trigger_nmi();
    cpu.reset();

    // The NMI latched before reset must not fire
    assert_eq!(cpu.step().unwrap(), 2);
    assert_eq!(cpu.pc(), 0x8001);
}
