//! Cycle-level RV32I pipeline core.
//!
//! This crate models a single-issue, in-order RISC-V core with the following:
//! 1. **ISA:** Total decoding of 32-bit RV32I words into opcode, register and immediate fields.
//! 2. **Core:** A three-slot pipeline (execute, memory access, writeback) with RAW hazard
//!    detection and operand forwarding, stepped one clock cycle at a time.
//! 3. **Units:** ALU, branch unit and load/store unit.
//! 4. **SoC:** Instruction and data memory collaborator traits plus a sparse reference memory.
//! 5. **Simulation:** Configuration and statistics collection.

/// Common types (traps, exceptions, register file).
pub mod common;
/// Simulator configuration (defaults and JSON deserialization).
pub mod config;
/// CPU core (pipeline, execution units, step protocol).
pub mod core;
/// Instruction set (decode, instruction fields, RV32I opcodes).
pub mod isa;
/// Memory collaborators (traits and reference memory).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; owns the register file, pipeline and memory collaborator.
pub use crate::core::CpuCore;
/// Sparse reference memory implementing both collaborator traits.
pub use crate::soc::memory::Memory;
