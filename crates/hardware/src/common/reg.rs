//! General-Purpose Register File.
//!
//! This module implements the integer register file of the core. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

/// Number of architectural integer registers.
pub const NUM_REGS: usize = 32;

/// General-purpose register file.
///
/// Register `x0` is hardwired to zero: it always reads as zero and writes to
/// it are discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx & (NUM_REGS - 1)] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are ignored.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx & (NUM_REGS - 1)] = val;
        }
    }

    /// Returns a copy of all register values, `x0` included.
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        self.regs
    }

    /// Logs the contents of all registers at debug level.
    ///
    /// Registers are emitted in pairs with hexadecimal formatting.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(2) {
            tracing::debug!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}
