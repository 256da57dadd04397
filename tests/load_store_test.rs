//! Tests for LDA/LDX/LDY and STA/STX/STY.

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
fn test_lda_immediate() {
    let mut cpu = setup_cpu(&[0xA9, 0x42]); // LDA #$42

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cycles, 2);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lda_sets_zero_flag() {
    let mut cpu = setup_cpu(&[0xA9, 0x00]); // LDA #$00
    cpu.set_a(0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lda_sets_negative_flag() {
    let mut cpu = setup_cpu(&[0xA9, 0x80]); // LDA #$80

    cpu.step().unwrap();

    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_ldx_immediate() {
    let mut cpu = setup_cpu(&[0xA2, 0x99]); // LDX #$99

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x99);
    assert!(cpu.flag_n());
    assert_eq!(cycles, 2);
}

#[test]
fn test_ldy_absolute_x_page_cross() {
    let mut cpu = setup_cpu(&[0xBC, 0xFF, 0x20]); // LDY $20FF,X
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x2100, 0x07);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x07);
    assert_eq!(cycles, 5);
}

#[test]
fn test_sta_zero_page() {
    let mut cpu = setup_cpu(&[0x85, 0x10]); // STA $10
    cpu.set_a(0x42);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x42);
    assert_eq!(cycles, 3);
}

#[test]
fn test_sta_does_not_affect_flags() {
    let mut cpu = setup_cpu(&[0x85, 0x10]); // STA $10
    cpu.set_a(0x00);
    let status_before = cpu.status();

    cpu.step().unwrap();

    assert_eq!(cpu.status(), status_before);
}

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup_cpu(&[0x96, 0x10]); // STX $10,Y
    cpu.set_x(0x42);
    cpu.set_y(0x05);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0015), 0x42);
    assert_eq!(cycles, 4);
}

#[test]
fn test_sty_absolute() {
    let mut cpu = setup_cpu(&[0x8C, 0x00, 0x30]); // STY $3000
    cpu.set_y(0x42);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x3000), 0x42);
    assert_eq!(cycles, 4);
}

#[test]
fn test_sta_indirect_indexed_fixed_cost() {
    // Stores pay the indexed fixup unconditionally: 6 cycles with or
    // without a page crossing.
    let mut cpu = setup_cpu(&[0x91, 0x20]); // STA ($20),Y
    cpu.set_a(0x42);
    cpu.set_y(0x02);
    cpu.memory_mut().write(0x0020, 0x00);
    cpu.memory_mut().write(0x0021, 0x12);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x1202), 0x42);
    assert_eq!(cycles, 6);
}

#[test]
fn test_load_store_round_trip() {
    let mut cpu = setup_cpu(&[
        0xA9, 0x5A, // LDA #$5A
        0x85, 0x40, // STA $40
        0xA6, 0x40, // LDX $40
    ]);

    cpu.step().unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x5A);
    assert_eq!(cpu.pc(), 0x8006);
    assert_eq!(cpu.cycles(), 2 + 3 + 3);
}
