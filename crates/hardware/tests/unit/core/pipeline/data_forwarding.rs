//! Data Forwarding Tests: RAW Hazard Resolution.
//!
//! Runs short programs through the core and checks that consumers observe
//! producer results from the memory-access and writeback slots, including
//! loaded data forwarded in the cycle it is read.

use pretty_assertions::assert_eq;
use rktcpu_core::core::pipeline::hazards::{HazardRecord, ProducerSlot};
use rktcpu_core::core::pipeline::{ForwardingMux, Operands};
use rktcpu_core::common::RegisterFile;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;

fn b() -> InstructionBuilder {
    InstructionBuilder::new()
}

// ══════════════════════════════════════════════════════════
// 1. ForwardingMux::resolve
// ══════════════════════════════════════════════════════════

#[test]
fn resolve_selects_source_by_record() {
    let mut regs = RegisterFile::new();
    regs.write(3, 30);
    assert_eq!(ForwardingMux::resolve(3, HazardRecord::NoHazard, &regs, 1, 2), 30);
    assert_eq!(
        ForwardingMux::resolve(3, HazardRecord::PendingAt(ProducerSlot::MemAccess), &regs, 1, 2),
        1
    );
    assert_eq!(
        ForwardingMux::resolve(3, HazardRecord::PendingAt(ProducerSlot::Writeback), &regs, 1, 2),
        2
    );
}

// ══════════════════════════════════════════════════════════
// 2. Distance-one and distance-two producers
// ══════════════════════════════════════════════════════════

#[test]
fn adjacent_consumer_forwards_from_memaccess() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[b().add(5, 1, 2).build(), b().sub(6, 5, 1).build()],
    );
    ctx.set_reg(1, 3);
    ctx.set_reg(2, 4);

    ctx.step().unwrap();
    ctx.step().unwrap();

    let sub = ctx.cpu.pipeline.execute.unwrap();
    assert_eq!(sub.hazards.rs1, HazardRecord::PendingAt(ProducerSlot::MemAccess));
    assert_eq!(sub.hazards.rs2, HazardRecord::NoHazard);
    assert_eq!(sub.operands.a, 7);
    assert_eq!(sub.result, 4);
    // The ADD has not committed yet.
    assert_eq!(ctx.get_reg(5), 0);
}

#[test]
fn distance_two_consumer_forwards_from_writeback() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[
            b().add(5, 1, 2).build(),
            b().addi(9, 0, 1).build(),
            b().add(6, 5, 5).build(),
        ],
    );
    ctx.set_reg(1, 10);
    ctx.set_reg(2, 20);

    ctx.run(3);

    let reader = ctx.cpu.pipeline.execute.unwrap();
    assert_eq!(reader.hazards.rs1, HazardRecord::PendingAt(ProducerSlot::Writeback));
    assert_eq!(reader.hazards.rs2, HazardRecord::PendingAt(ProducerSlot::Writeback));
    assert_eq!(reader.result, 60);
}

#[test]
fn newest_producer_wins() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[
            b().addi(5, 0, 1).build(),
            b().addi(5, 0, 2).build(),
            b().add(6, 5, 0).build(),
        ],
    );
    ctx.run_and_drain(3);
    assert_eq!(ctx.get_reg(6), 2);
    assert_eq!(ctx.get_reg(5), 2);
}

#[test]
fn writes_to_x0_are_not_forwarded() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[b().addi(0, 0, 5).build(), b().add(1, 0, 0).build()],
    );
    ctx.run_and_drain(2);
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.get_reg(0), 0);
}

// ══════════════════════════════════════════════════════════
// 3. Memory producers and consumers
// ══════════════════════════════════════════════════════════

#[test]
fn load_result_forwards_without_stall() {
    let mut ctx = TestContext::new()
        .load_program(0, &[b().lw(2, 0, 0x100).build(), b().add(3, 2, 2).build()])
        .with_data(0x100, &[42]);

    ctx.run(2);
    let add = ctx.cpu.pipeline.execute.unwrap();
    assert_eq!(add.hazards.rs1, HazardRecord::PendingAt(ProducerSlot::MemAccess));
    assert_eq!(add.result, 84);

    ctx.cpu.drain().unwrap();
    assert_eq!(ctx.get_reg(3), 84);
}

#[test]
fn store_data_is_forwarded() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[b().addi(1, 0, 0x55).build(), b().sw(0, 1, 0x200).build()],
    );
    ctx.run(2);

    let sw = ctx.cpu.pipeline.execute.unwrap();
    assert_eq!(sw.hazards.rs2, HazardRecord::PendingAt(ProducerSlot::MemAccess));
    assert_eq!(
        sw.operands,
        Operands {
            a: 0,
            b: 0x200,
            rs2: 0x55
        }
    );

    ctx.cpu.drain().unwrap();
    assert_eq!(ctx.cpu.bus.word(0x200), Some(0x55));
}

#[test]
fn store_then_load_same_address() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[
            b().addi(1, 0, -2).build(),
            b().sw(0, 1, 0x300).build(),
            b().lw(2, 0, 0x300).build(),
            b().lbu(3, 0, 0x300).build(),
        ],
    );
    ctx.run_and_drain(4);
    assert_eq!(ctx.get_reg(2), 0xFFFF_FFFE);
    assert_eq!(ctx.get_reg(3), 0xFE);
}

#[test]
fn branch_compares_forwarded_operands() {
    // bne sees the forwarded x1 = 3, is taken, and skips the poison write.
    let mut ctx = TestContext::new().load_program(
        0,
        &[
            b().addi(1, 0, 3).build(),
            b().bne(1, 0, 8).build(),
            b().addi(2, 0, 99).build(),
            b().addi(3, 0, 7).build(),
            b().ecall().build(),
        ],
    );
    let run = ctx.cpu.run(10).unwrap();
    assert!(run.halt.is_some());
    assert!(run.commits.iter().all(|c| c.rd != 2));
    assert_eq!(ctx.get_reg(2), 0);
    assert_eq!(ctx.get_reg(3), 7);
}

#[test]
fn forward_counters_track_slots() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[
            b().addi(1, 0, 1).build(),
            b().addi(2, 1, 1).build(),
            b().add(3, 1, 2).build(),
        ],
    );
    ctx.run_and_drain(3);
    assert_eq!(ctx.get_reg(3), 3);
    // addi x2 reads x1 from memaccess; add reads x2 from memaccess and x1 from writeback.
    assert_eq!(ctx.cpu.stats.forwards_mem, 2);
    assert_eq!(ctx.cpu.stats.forwards_wb, 1);
}
