//! Tests for the status flag manipulation instructions.

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
fn test_clc_and_sec() {
    let mut cpu = setup_cpu(&[0x38, 0x18]); // SEC; CLC

    let cycles = cpu.step().unwrap();
    assert!(cpu.flag_c());
    assert_eq!(cycles, 2);

    cpu.step().unwrap();
    assert!(!cpu.flag_c());
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_cli_and_sei() {
    let mut cpu = setup_cpu(&[0x58, 0x78]); // CLI; SEI

    cpu.step().unwrap();
    assert!(!cpu.flag_i()); // reset leaves I set

    cpu.step().unwrap();
    assert!(cpu.flag_i());
}

#[test]
fn test_clv() {
    let mut cpu = setup_cpu(&[0xB8]); // CLV
    cpu.set_flag_v(true);

    cpu.step().unwrap();

    assert!(!cpu.flag_v());
}

#[test]
fn test_cld_and_sed_track_the_bit() {
    // D is storable and pushable even though arithmetic ignores it.
    let mut cpu = setup_cpu(&[0xF8, 0xD8]); // SED; CLD

    cpu.step().unwrap();
    assert_ne!(cpu.status() & 0b0000_1000, 0);

    cpu.step().unwrap();
    assert_eq!(cpu.status() & 0b0000_1000, 0);
}

#[test]
fn test_flag_ops_touch_only_their_flag() {
    let mut cpu = setup_cpu(&[0x18]); // CLC
    cpu.set_flag_c(true);
    cpu.set_flag_z(true);
    cpu.set_flag_n(true);
    cpu.set_flag_v(true);

    cpu.step().unwrap();

    assert!(!cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
}
