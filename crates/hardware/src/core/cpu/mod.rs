//! CPU Core Definition and Initialization.
//!
//! This module defines the central `CpuCore` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the register file and program counter.
//! 2. **Pipeline Control:** Owns the execute, memory-access and writeback slots.
//! 3. **Memory Integration:** Talks to a collaborator implementing instruction and data access.
//! 4. **Observability:** Reports one commit per cycle and collects statistics.

/// Step protocol, fetch and execute.
pub mod execution;

/// Memory-access and writeback slot handling.
pub mod memory;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::pipeline::latches::Pipeline;
use crate::stats::SimStats;

/// A register write made visible at writeback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Commit {
    /// Program counter of the committing instruction.
    pub pc: u32,
    /// Destination register (never 0).
    pub rd: usize,
    /// Value written.
    pub value: u32,
}

/// Environment instruction observed in the execute slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HaltReason {
    /// `ECALL` at the given pc.
    EnvironmentCall {
        /// Program counter of the instruction.
        pc: u32,
    },
    /// `EBREAK` at the given pc.
    Breakpoint {
        /// Program counter of the instruction.
        pc: u32,
    },
}

/// Observable outcome of one successful `step()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Cycle number of this step, starting at 1.
    pub cycle: u64,
    /// Register commit made this cycle, if any.
    pub commit: Option<Commit>,
    /// Program counter of the instruction that entered execute, if any.
    pub issued: Option<u32>,
    /// Set when an `ECALL`/`EBREAK` entered execute this cycle.
    pub halt: Option<HaltReason>,
}

/// Outcome of [`CpuCore::run`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Environment instruction that stopped the run, if any.
    pub halt: Option<HaltReason>,
    /// Every commit made during the run, drain included, oldest first.
    pub commits: Vec<Commit>,
}

/// Pipelined RV32I core.
///
/// Generic over the memory collaborator `M`, which must implement
/// [`InstructionMemory`](crate::soc::traits::InstructionMemory) and
/// [`DataMemory`](crate::soc::traits::DataMemory) to be stepped.
#[derive(Clone, Debug)]
pub struct CpuCore<M> {
    /// General purpose registers.
    pub regs: RegisterFile,
    /// Address of the next instruction to fetch.
    pub pc: u32,
    /// In-flight instructions.
    pub pipeline: Pipeline,
    /// Memory collaborator.
    pub bus: M,
    /// Performance counters.
    pub stats: SimStats,
    /// Log commits at debug level.
    pub trace: bool,
    /// Register commit made in the most recent cycle, `None` if it made none.
    pub last_commit: Option<Commit>,
}

impl<M> CpuCore<M> {
    /// Creates a core with an empty pipeline and zeroed registers.
    ///
    /// # Arguments
    ///
    /// * `bus` - Memory collaborator serving fetches, loads and stores.
    /// * `config` - Supplies the reset pc and tracing flag.
    pub fn new(bus: M, config: &Config) -> Self {
        tracing::debug!(
            start_pc = format_args!("{:#010x}", config.general.start_pc),
            trace = config.general.trace_instructions,
            "core reset"
        );
        Self {
            regs: RegisterFile::new(),
            pc: config.general.start_pc,
            pipeline: Pipeline::new(),
            bus,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
            last_commit: None,
        }
    }

    /// Reads an architectural register.
    pub fn reg(&self, idx: usize) -> u32 {
        self.regs.read(idx)
    }

    /// Logs the pc, pipeline occupancy and register contents at debug level.
    pub fn dump_state(&self) {
        tracing::debug!(
            pc = format_args!("{:#010x}", self.pc),
            ex = ?self.pipeline.execute.map(|e| e.inst.pc),
            mem = ?self.pipeline.memaccess.map(|e| e.inst.pc),
            wb = ?self.pipeline.writeback.map(|e| e.inst.pc),
            "core state"
        );
        self.regs.dump();
    }
}
