//! Tests for the LDA (Load Accumulator) instruction across all eight of its
//! addressing modes, including flag derivation, cycle costs, and the
//! page-crossing penalty.

use nmos6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== Immediate ==========

#[test]
fn test_lda_immediate() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x42]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_lda_immediate_zero_sets_z() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x00]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_lda_immediate_negative_sets_n() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x80]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_lda_clears_stale_nz() {
    let mut cpu = setup_cpu();
    cpu.set_flag_z(true);
    cpu.set_flag_n(true);
    cpu.memory_mut().load(0x8000, &[0xA9, 0x01]);

    cpu.step().unwrap();

    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lda_does_not_touch_other_flags() {
    let mut cpu = setup_cpu();
    cpu.set_flag_c(true);
    cpu.set_flag_v(true);
    cpu.set_flag_d(true);
    cpu.memory_mut().load(0x8000, &[0xA9, 0x42]);

    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
}

// ========== Zero page ==========

#[test]
fn test_lda_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0042, 0x37);
    cpu.memory_mut().load(0x8000, &[0xA5, 0x42]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_lda_zero_page_x_wraps() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x20);
    // 0xF0 + 0x20 wraps to 0x10
    cpu.memory_mut().write(0x0010, 0x55);
    cpu.memory_mut().load(0x8000, &[0xB5, 0xF0]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x55);
    assert_eq!(cpu.cycles(), 4);
}

// ========== Absolute ==========

#[test]
fn test_lda_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x1234, 0x99);
    cpu.memory_mut().load(0x8000, &[0xAD, 0x34, 0x12]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x10);
    cpu.memory_mut().write(0x1244, 0x77);
    cpu.memory_mut().load(0x8000, &[0xBD, 0x34, 0x12]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x77);
    assert_eq!(cpu.cycles(), 4, "no page crossed, no penalty");
}

#[test]
fn test_lda_absolute_x_page_cross_penalty() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x01);
    // 0x12FF + 1 = 0x1300, crossing into the next page
    cpu.memory_mut().write(0x1300, 0x77);
    cpu.memory_mut().load(0x8000, &[0xBD, 0xFF, 0x12]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x77);
    assert_eq!(cpu.cycles(), 5, "page crossing adds one cycle");
}

#[test]
fn test_lda_absolute_y() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x04);
    cpu.memory_mut().write(0x2004, 0x12);
    cpu.memory_mut().load(0x8000, &[0xB9, 0x00, 0x20]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x12);
    assert_eq!(cpu.cycles(), 4);
}

// ========== Indirect ==========

#[test]
fn test_lda_indirect_x() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x04);
    // Pointer at 0x40 + 0x04 = 0x44 -> 0x3000
    cpu.memory_mut().load(0x0044, &[0x00, 0x30]);
    cpu.memory_mut().write(0x3000, 0xAB);
    cpu.memory_mut().load(0x8000, &[0xA1, 0x40]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xAB);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_lda_indirect_y() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x10);
    // Pointer at 0x40 -> 0x3000, plus Y = 0x3010
    cpu.memory_mut().load(0x0040, &[0x00, 0x30]);
    cpu.memory_mut().write(0x3010, 0xCD);
    cpu.memory_mut().load(0x8000, &[0xB1, 0x40]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xCD);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_lda_indirect_y_page_cross_penalty() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x01);
    cpu.memory_mut().load(0x0040, &[0xFF, 0x30]);
    cpu.memory_mut().write(0x3100, 0xEE);
    cpu.memory_mut().load(0x8000, &[0xB1, 0x40]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xEE);
    assert_eq!(cpu.cycles(), 6);
}

// ========== Register preservation ==========

#[test]
fn test_lda_preserves_x_y_sp() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x11);
    cpu.set_y(0x22);
    cpu.memory_mut().load(0x8000, &[0xA9, 0x42]);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x11);
    assert_eq!(cpu.y(), 0x22);
    assert_eq!(cpu.sp(), 0xFD);
}
