//! Memory-Access and Writeback Slots.
//!
//! This module handles the two older pipeline slots. It performs the following:
//! 1. **Data Access:** Loads and stores of the memory-access occupant go through the LSU.
//! 2. **Load Completion:** Loaded data replaces the address as the entry's result so
//!    it can be forwarded in the same cycle.
//! 3. **Commit:** The writeback occupant's result is written to the register file.

use super::{Commit, CpuCore};
use crate::common::error::{Exception, ExceptionStage};
use crate::core::units::lsu::Lsu;
use crate::soc::traits::DataMemory;

impl<M: DataMemory> CpuCore<M> {
    /// Performs the data access of the memory-access occupant.
    ///
    /// A faulting entry is removed from the slot.
    ///
    /// # Errors
    ///
    /// Returns an [`Exception`] tagged [`ExceptionStage::MemAccess`] if the
    /// LSU or the memory collaborator rejects the access.
    pub(crate) fn memory_access(&mut self) -> Result<(), Exception> {
        let Some(entry) = self.pipeline.memaccess.as_mut() else {
            return Ok(());
        };
        let ctrl = entry.ctrl;
        let addr = entry.result;

        let outcome = if ctrl.mem_read {
            Lsu::load(&mut self.bus, addr, ctrl.width, ctrl.signed_load).map(|data| {
                entry.result = data;
                self.stats.loads += 1;
            })
        } else if ctrl.mem_write {
            Lsu::store(&mut self.bus, addr, ctrl.width, entry.operands.rs2).map(|()| {
                self.stats.stores += 1;
            })
        } else {
            return Ok(());
        };

        tracing::trace!(
            pc = format_args!("{:#010x}", entry.inst.pc),
            addr = format_args!("{addr:#010x}"),
            width = ?ctrl.width,
            store = ctrl.mem_write,
            "memory access"
        );

        if let Err(trap) = outcome {
            let pc = entry.inst.pc;
            self.pipeline.memaccess = None;
            return Err(self.fault(pc, ExceptionStage::MemAccess, trap));
        }
        Ok(())
    }

    /// Writes the writeback occupant's result to the register file.
    ///
    /// Returns the commit event when a non-zero register was written.
    pub(crate) fn writeback(&mut self) -> Option<Commit> {
        let entry = self.pipeline.writeback.as_ref()?;
        if !entry.ctrl.reg_write || entry.inst.rd == 0 {
            return None;
        }

        self.regs.write(entry.inst.rd, entry.result);
        let commit = Commit {
            pc: entry.inst.pc,
            rd: entry.inst.rd,
            value: entry.result,
        };
        if self.trace {
            tracing::debug!(
                pc = format_args!("{:#010x}", commit.pc),
                "x{:<2} <- {:#010x}",
                commit.rd,
                commit.value
            );
        }
        self.stats.commits += 1;
        self.last_commit = Some(commit);
        Some(commit)
    }
}
