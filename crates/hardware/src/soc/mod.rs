//! Memory collaborators.
//!
//! This module organizes the components the core talks to: the collaborator
//! traits, the sparse reference memory, and a split instruction/data bus.

/// Split instruction/data bus.
pub mod interconnect;

/// Sparse reference memory.
pub mod memory;

/// Instruction and data memory trait definitions.
pub mod traits;

pub use interconnect::Bus;
pub use memory::Memory;
pub use traits::{AlignmentPolicy, DataMemory, InstructionMemory};
