//! Data hazard detection.
//!
//! This module identifies read-after-write (RAW) dependencies between the
//! instruction entering execute and the two older instructions still in
//! flight. It provides:
//! 1. **Per-register checks:** Which slot, if any, holds the newest pending write.
//! 2. **Consumer filtering:** Only registers the entering opcode actually reads are checked.
//!
//! Results are consumed by the [`ForwardingMux`](super::forwarding::ForwardingMux).
//! Because loads complete on entering the memory-access slot, every hazard
//! can be satisfied by forwarding and the pipeline never stalls.

use crate::core::pipeline::latches::Pipeline;
use crate::core::pipeline::signals::{reads_rs1, reads_rs2};
use crate::isa::instruction::Instruction;

/// Slot holding the producer of a pending register value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProducerSlot {
    /// The instruction one step ahead (memory-access slot).
    MemAccess,
    /// The instruction two steps ahead (writeback slot).
    Writeback,
}

/// Outcome of a hazard check for one source register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HazardRecord {
    /// No in-flight instruction writes the register.
    #[default]
    NoHazard,
    /// The newest write to the register is pending in the given slot.
    PendingAt(ProducerSlot),
}

impl HazardRecord {
    /// Whether this record requires a forwarded value.
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::PendingAt(_))
    }
}

/// Hazard records for both source operands of one instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OperandHazards {
    /// Record for `rs1`.
    pub rs1: HazardRecord,
    /// Record for `rs2`.
    pub rs2: HazardRecord,
}

/// Hazard detection unit.
#[derive(Debug)]
pub struct HazardUnit;

impl HazardUnit {
    /// Checks whether register `rs` has a pending write in the pipeline.
    ///
    /// The memory-access occupant is newer than the writeback occupant, so it
    /// wins when both write `rs`. Register `x0` never has a hazard.
    pub fn check(rs: usize, pipeline: &Pipeline) -> HazardRecord {
        if rs == 0 {
            return HazardRecord::NoHazard;
        }
        if pipeline.memaccess.as_ref().is_some_and(|e| e.writes(rs)) {
            HazardRecord::PendingAt(ProducerSlot::MemAccess)
        } else if pipeline.writeback.as_ref().is_some_and(|e| e.writes(rs)) {
            HazardRecord::PendingAt(ProducerSlot::Writeback)
        } else {
            HazardRecord::NoHazard
        }
    }

    /// Checks both source registers of `inst`.
    ///
    /// A register the opcode does not read is reported as [`HazardRecord::NoHazard`]
    /// even if its field happens to match a pending destination.
    pub fn detect(inst: &Instruction, pipeline: &Pipeline) -> OperandHazards {
        let rs1 = if reads_rs1(inst.opcode) {
            Self::check(inst.rs1, pipeline)
        } else {
            HazardRecord::NoHazard
        };
        let rs2 = if reads_rs2(inst.opcode) {
            Self::check(inst.rs2, pipeline)
        } else {
            HazardRecord::NoHazard
        };
        OperandHazards { rs1, rs2 }
    }
}
