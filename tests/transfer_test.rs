//! Tests for the register transfer instructions TAX, TAY, TSX, TXA, TXS,
//! and TYA.

use nmos6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_tax() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);
    cpu.memory_mut().write(0x8000, 0xAA);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x42);
    assert_eq!(cpu.a(), 0x42, "source register unchanged");
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_tax_zero_sets_z() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x00);
    cpu.set_x(0x42);
    cpu.memory_mut().write(0x8000, 0xAA);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_tax_negative_sets_n() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);
    cpu.memory_mut().write(0x8000, 0xAA);

    cpu.step().unwrap();

    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_tay() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);
    cpu.memory_mut().write(0x8000, 0xA8);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x42);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_tsx() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0x80);
    cpu.memory_mut().write(0x8000, 0xBA);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n(), "0x80 has bit 7 set");
}

#[test]
fn test_txa() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x42);
    cpu.memory_mut().write(0x8000, 0x8A);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_tya() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x42);
    cpu.memory_mut().write(0x8000, 0x98);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_txs_sets_sp_without_flags() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x00); // zero would set Z on any other transfer
    cpu.memory_mut().write(0x8000, 0x9A);

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x00);
    assert!(!cpu.flag_z(), "TXS must not touch flags");
    assert!(!cpu.flag_n());
}

#[test]
fn test_txs_negative_value_no_flags() {
    let mut cpu = setup_cpu();
    cpu.set_x(0xFF);
    cpu.memory_mut().write(0x8000, 0x9A);

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0xFF);
    assert!(!cpu.flag_n());
}

#[test]
fn test_transfer_chain() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);
    // TAX, TXS, TSX back into X
    cpu.memory_mut().load(0x8000, &[0xAA, 0x9A, 0xBA]);

    cpu.step().unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x42);
    assert_eq!(cpu.x(), 0x42);
    assert_eq!(cpu.cycles(), 6);
}
