//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic for
//! the RV32I base integer instruction set.

/// Instruction decoding logic for all RISC-V immediate formats.
pub mod decode;

/// Instruction record and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;

pub use decode::decode;
pub use instruction::{ImmFormat, Instruction};
