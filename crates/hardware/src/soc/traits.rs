//! Memory collaborator traits.
//!
//! This module defines the interfaces the core uses to reach memory. It provides:
//! 1. **Instruction Fetch:** `InstructionMemory` returns 32-bit words by program counter.
//! 2. **Data Access:** `DataMemory` performs sized loads and stores.
//! 3. **Alignment:** Each data memory declares the misaligned accesses it accepts.
//!
//! Both traits report faults as [`Trap`] values; the core attaches the pc and
//! stage before surfacing them from `step()`.

use serde::Deserialize;

use crate::common::Trap;
use crate::core::pipeline::signals::MemWidth;

/// Misaligned data access policy declared by a [`DataMemory`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentPolicy {
    /// Every access must be aligned to its own width.
    #[default]
    Natural,
    /// An access may be misaligned as long as it stays inside one 32-bit word.
    WithinWord,
    /// Any address is accepted; accesses may span word boundaries.
    Unrestricted,
}

/// Source of instruction words.
pub trait InstructionMemory {
    /// Fetches the 32-bit word at `pc`.
    ///
    /// # Errors
    ///
    /// Returns a [`Trap`] if `pc` is not backed or not fetchable.
    fn fetch(&mut self, pc: u32) -> Result<u32, Trap>;
}

/// Target of load and store instructions.
pub trait DataMemory {
    /// Alignment policy enforced by the load/store unit before each access.
    fn alignment(&self) -> AlignmentPolicy {
        AlignmentPolicy::Natural
    }

    /// Reads `width` bytes at `addr`, little-endian, zero-extended to 32 bits.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::OutOfBounds`] if any accessed byte is not backed.
    fn load(&mut self, addr: u32, width: MemWidth) -> Result<u32, Trap>;

    /// Writes the low `width` bytes of `value` at `addr`, little-endian.
    ///
    /// # Errors
    ///
    /// Returns a [`Trap`] if the memory refuses the write.
    fn store(&mut self, addr: u32, width: MemWidth, value: u32) -> Result<(), Trap>;
}
