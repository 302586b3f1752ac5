//! Statistics Tests.

use pretty_assertions::assert_eq;
use rktcpu_core::stats::SimStats;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;

fn b() -> InstructionBuilder {
    InstructionBuilder::new()
}

#[test]
fn cpi_is_zero_before_retirement() {
    assert!(SimStats::default().cpi().abs() < f64::EPSILON);
}

#[test]
fn cpi_divides_cycles_by_retired() {
    let stats = SimStats {
        cycles: 10,
        instructions_retired: 4,
        ..SimStats::default()
    };
    assert!((stats.cpi() - 2.5).abs() < f64::EPSILON);
}

#[test]
fn counters_after_program() {
    let mut ctx = TestContext::new()
        .load_program(
            0,
            &[
                b().addi(1, 0, 3).build(),
                b().lw(2, 0, 0x100).build(),
                b().add(3, 2, 1).build(),
                b().sw(0, 3, 0x104).build(),
                b().jal(0, 4).build(),
            ],
        )
        .with_data(0x100, &[3]);

    let _ = ctx.run_and_drain(5);
    let stats = &ctx.cpu.stats;

    assert_eq!(stats.cycles, 8);
    assert_eq!(stats.instructions_retired, 5);
    assert_eq!(stats.commits, 3);
    assert_eq!(stats.loads, 1);
    assert_eq!(stats.stores, 1);
    assert_eq!(stats.taken_transfers, 1);
    // add takes x2 from MEM and x1 from WB; sw takes x3 from MEM.
    assert_eq!(stats.forwards_mem, 2);
    assert_eq!(stats.forwards_wb, 1);
    assert_eq!(stats.traps, 0);
    assert_eq!(ctx.get_reg(3), 6);
    assert_eq!(ctx.cpu.bus.word(0x104), Some(6));
}

#[test]
fn serializes_to_json() {
    let stats = SimStats {
        cycles: 7,
        loads: 2,
        ..SimStats::default()
    };
    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(value["cycles"], 7);
    assert_eq!(value["loads"], 2);
    assert_eq!(value["traps"], 0);
}
