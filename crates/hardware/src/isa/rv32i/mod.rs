//! RV32I encoding constants.
//!
//! `opcodes` names the major opcodes; `funct3` and `funct7` name the minor
//! fields that select an operation within one. Decoding itself lives in
//! [`crate::isa::decode`].

/// Minor opcodes in bits 14-12.
pub mod funct3;

/// Minor opcodes in bits 31-25.
pub mod funct7;

/// Major opcodes in bits 6-0.
pub mod opcodes;
