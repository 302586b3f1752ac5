//! Execution units.
//!
//! This module contains the functional units used by the execute and
//! memory-access slots: the integer ALU, the branch resolution unit and the
//! load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit.
pub mod bru;

/// Load/Store Unit for memory access operations.
pub mod lsu;
