//! Pipeline slot structures.
//!
//! This module defines the three-slot pipeline: Execute → MemAccess → Writeback.
//!
//! 1. **Instruction Flow:** Each slot holds at most one [`StageEntry`].
//! 2. **Shifting:** Every cycle the writeback occupant retires and the others move down.
//! 3. **Issue:** The newly executed instruction enters the empty execute slot.

use crate::core::pipeline::forwarding::Operands;
use crate::core::pipeline::hazards::OperandHazards;
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::Instruction;

/// Named pipeline slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Operand resolution, ALU work, branch resolution and address generation.
    Execute,
    /// Data memory access.
    MemAccess,
    /// Register file commit.
    Writeback,
}

/// An in-flight instruction and everything computed for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageEntry {
    /// Decoded instruction.
    pub inst: Instruction,
    /// Control signals derived at execute.
    pub ctrl: ControlSignals,
    /// Hazard records observed for `rs1` and `rs2` when it executed.
    pub hazards: OperandHazards,
    /// Operand values after forwarding.
    pub operands: Operands,
    /// Value destined for `rd`: the ALU result, link address, or loaded data
    /// once the memory access has completed. For stores, the effective address.
    pub result: u32,
}

impl StageEntry {
    /// Whether this entry will write a non-zero destination register.
    pub const fn writes(&self, reg: usize) -> bool {
        self.ctrl.reg_write && self.inst.rd != 0 && self.inst.rd == reg
    }
}

/// The three pipeline slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pipeline {
    /// Youngest instruction.
    pub execute: Option<StageEntry>,
    /// Instruction one step ahead of execute.
    pub memaccess: Option<StageEntry>,
    /// Oldest instruction; its result is committed to the register file.
    pub writeback: Option<StageEntry>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances every occupant by one slot.
    ///
    /// Returns the entry that left writeback, if any. The execute slot is
    /// empty afterwards.
    pub const fn shift(&mut self) -> Option<StageEntry> {
        let retired = self.writeback.take();
        self.writeback = self.memaccess.take();
        self.memaccess = self.execute.take();
        retired
    }

    /// Places a freshly executed entry into the execute slot.
    ///
    /// Returns the previous occupant, which is `None` after a [`shift`](Self::shift).
    pub const fn issue(&mut self, entry: StageEntry) -> Option<StageEntry> {
        self.execute.replace(entry)
    }

    /// Returns the occupant of `stage`.
    pub const fn slot(&self, stage: Stage) -> Option<&StageEntry> {
        match stage {
            Stage::Execute => self.execute.as_ref(),
            Stage::MemAccess => self.memaccess.as_ref(),
            Stage::Writeback => self.writeback.as_ref(),
        }
    }

    /// Number of occupied slots.
    pub fn occupancy(&self) -> usize {
        [&self.execute, &self.memaccess, &self.writeback]
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    }

    /// Whether every slot is empty.
    pub const fn is_empty(&self) -> bool {
        self.execute.is_none() && self.memaccess.is_none() && self.writeback.is_none()
    }
}
