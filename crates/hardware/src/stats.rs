//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the core. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived CPI.
//! 2. **Instruction mix:** Loads, stores, and taken control transfers.
//! 3. **Forwarding:** How often operands were bypassed from each slot.
//! 4. **Faults:** Number of exceptions raised by `step()`.

use serde::Serialize;

/// Simulation statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total `step()` calls that advanced the clock.
    pub cycles: u64,
    /// Instructions that left the writeback slot.
    pub instructions_retired: u64,
    /// Register commits reported (writes to `x0` excluded).
    pub commits: u64,
    /// Loads that completed their memory access.
    pub loads: u64,
    /// Stores that completed their memory access.
    pub stores: u64,
    /// Branches that were taken plus all jumps.
    pub taken_transfers: u64,
    /// Operands forwarded from the memory-access slot.
    pub forwards_mem: u64,
    /// Operands forwarded from the writeback slot.
    pub forwards_wb: u64,
    /// Exceptions surfaced from `step()`.
    pub traps: u64,
}

impl SimStats {
    /// Cycles per retired instruction, or `0.0` before anything retired.
    #[allow(clippy::cast_precision_loss)]
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Logs a summary at info level.
    pub fn report(&self) {
        tracing::info!(
            cycles = self.cycles,
            retired = self.instructions_retired,
            cpi = format_args!("{:.4}", self.cpi()),
            loads = self.loads,
            stores = self.stores,
            taken = self.taken_transfers,
            fwd_mem = self.forwards_mem,
            fwd_wb = self.forwards_wb,
            traps = self.traps,
            "simulation statistics"
        );
    }
}
