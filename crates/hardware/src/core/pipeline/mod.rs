//! Instruction pipeline implementation.
//!
//! This module contains the three-slot in-order pipeline. It includes:
//! 1. **Signals:** Control signals and operand routing derived from the opcode.
//! 2. **Latches:** The execute, memory-access and writeback slots.
//! 3. **Hazards:** Read-after-write detection against in-flight instructions.
//! 4. **Forwarding:** Operand selection from the register file or pending results.

/// Operand forwarding multiplexer.
pub mod forwarding;

/// Pipeline hazard detection.
pub mod hazards;

/// Pipeline slots and in-flight entries.
pub mod latches;

/// Control signals derived from decoded instructions.
pub mod signals;

pub use forwarding::{ForwardingMux, Operands};
pub use hazards::{HazardRecord, HazardUnit, OperandHazards, ProducerSlot};
pub use latches::{Pipeline, Stage, StageEntry};
pub use signals::{ControlSignals, InstClass};
