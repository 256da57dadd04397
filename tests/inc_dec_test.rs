//! Tests for INC/DEC and the register increment/decrement instructions.

use nes6502::{CPU, FlatMemory, MemoryBus};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    for (i, byte) in program.iter().enumerate() {
        memory.write(0x8000 + i as u16, *byte);
    }
    CPU::new(memory)
}

#[test]
fn test_inc_zero_page() {
    let mut cpu = setup_cpu(&[0xE6, 0x10]); // INC $10
    cpu.memory_mut().write(0x0010, 0x41);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cycles, 5);
}

#[test]
fn test_inc_wraps_to_zero() {
    let mut cpu = setup_cpu(&[0xE6, 0x10]); // INC $10
    cpu.memory_mut().write(0x0010, 0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_inc_does_not_touch_carry() {
    let mut cpu = setup_cpu(&[0xE6, 0x10]); // INC $10
    cpu.memory_mut().write(0x0010, 0xFF);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert!(!cpu.flag_c());
}

#[test]
fn test_dec_absolute() {
    let mut cpu = setup_cpu(&[0xCE, 0x00, 0x20]); // DEC $2000
    cpu.memory_mut().write(0x2000, 0x01);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x2000), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cycles, 6);
}

#[test]
fn test_dec_wraps_to_ff() {
    let mut cpu = setup_cpu(&[0xC6, 0x10]); // DEC $10
    // memory defaults to zero

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_inx_and_dex() {
    let mut cpu = setup_cpu(&[0xE8, 0xCA]); // INX; DEX
    cpu.set_x(0x7F);

    let cycles = cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(cycles, 2);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x7F);
    assert!(!cpu.flag_n());
}

#[test]
fn test_iny_wraps() {
    let mut cpu = setup_cpu(&[0xC8]); // INY
    cpu.set_y(0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_dey_wraps() {
    let mut cpu = setup_cpu(&[0x88]); // DEY
    cpu.set_y(0x00);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_inc_absolute_x_fixed_seven_cycles() {
    let mut cpu = setup_cpu(&[0xFE, 0x00, 0x12]); // INC $1200,X
    cpu.set_x(0x05);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x1205), 0x01);
    assert_eq!(cycles, 7);
}
