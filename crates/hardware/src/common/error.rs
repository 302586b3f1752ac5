//! Trap and exception definitions.
//!
//! This module defines the error handling for the core. It provides:
//! 1. **Trap Representation:** The fault kinds an instruction or a memory collaborator can raise.
//! 2. **Exceptions:** A trap tagged with the faulting pc and the stage that detected it.
//! 3. **Simulator Errors:** The top-level error type, including configuration failures.

use thiserror::Error;

/// Fault kinds that stop forward progress of an instruction.
///
/// Memory collaborators return these directly; the core wraps them in an
/// [`Exception`] carrying the pc of the faulting instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// Unrecognised opcode or function-code combination.
    ///
    /// Raised at execute time. The associated value is the instruction encoding.
    #[error("IllegalInstruction({0:#010x})")]
    IllegalInstruction(u32),

    /// Data access violating the alignment policy of the memory collaborator.
    ///
    /// The associated value is the effective address.
    #[error("MisalignedAccess({0:#010x})")]
    MisalignedAccess(u32),

    /// Access to an address the memory collaborator does not back.
    ///
    /// The associated value is the faulting address.
    #[error("OutOfBounds({0:#010x})")]
    OutOfBounds(u32),
}

/// Pipeline stage where an exception was first detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExceptionStage {
    /// Instruction fetch from the instruction memory collaborator.
    Fetch,
    /// Execute slot (illegal encodings).
    Execute,
    /// Memory-access slot (load/store faults).
    MemAccess,
}

/// A trap raised by a specific instruction during a `step()`.
///
/// The faulting instruction has been removed from the pipeline; older
/// instructions have already shifted and committed in the same cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{trap} at pc={pc:#010x} ({stage:?})")]
pub struct Exception {
    /// Program counter of the faulting instruction.
    pub pc: u32,
    /// Stage that detected the fault.
    pub stage: ExceptionStage,
    /// The underlying trap.
    pub trap: Trap,
}

/// Top-level error type for the simulator.
#[derive(Debug, Error)]
pub enum SimError {
    /// An instruction faulted while stepping the core.
    #[error(transparent)]
    Exception(#[from] Exception),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
