//! `funct7` selectors (bits 31-25).
//!
//! Only two values are legal in RV32I: all zeros, and bit 30 set to pick
//! the alternate form of `add` or a right shift.

/// Plain form: `add`, `srl` and every other register-register operation.
pub const DEFAULT: u32 = 0b0000000;

/// Alternate form of `add`.
pub const SUB: u32 = 0b0100000;
/// Alternate form of a right shift. Same bits as [`SUB`].
pub const SRA: u32 = SUB;
