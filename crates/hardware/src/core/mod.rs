//! Core processor implementation.
//!
//! This module contains the CPU core, its three-slot pipeline and the
//! execution units the pipeline drives.

/// CPU core implementation and step protocol.
pub mod cpu;

/// Instruction pipeline implementation (slots, hazards, forwarding, signals).
pub mod pipeline;

/// Execution units (ALU, branch unit, LSU).
pub mod units;

pub use self::cpu::{Commit, CpuCore, HaltReason, RunReport, StepReport};
