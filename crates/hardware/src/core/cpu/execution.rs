//! Main Execution Loop.
//!
//! This module implements the per-cycle step protocol of the core. Each cycle:
//! 1. **Shift:** The writeback occupant retires and the other slots move down.
//! 2. **Memory Access:** The new memory-access occupant performs its load or store.
//! 3. **Writeback:** The new writeback occupant commits to the register file.
//! 4. **Fetch/Execute:** A new instruction is fetched, decoded, has its operands
//!    forwarded, executes, and enters the execute slot.
//!
//! Branches and jumps resolve before the next fetch, so the core never
//! fetches down a wrong path.

use super::{Commit, CpuCore, HaltReason, RunReport, StepReport};
use crate::common::error::{Exception, ExceptionStage, Trap};
use crate::core::pipeline::forwarding::{ForwardingMux, Operands};
use crate::core::pipeline::hazards::{HazardRecord, HazardUnit, OperandHazards, ProducerSlot};
use crate::core::pipeline::latches::StageEntry;
use crate::core::pipeline::signals::{ControlSignals, InstClass};
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::core::units::lsu::Lsu;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::soc::traits::{DataMemory, InstructionMemory};

/// Result of the execute slot for one instruction.
struct Executed {
    result: u32,
    next_pc: u32,
    redirected: bool,
}

impl<M: InstructionMemory + DataMemory> CpuCore<M> {
    /// Advances the core by one clock cycle.
    ///
    /// # Errors
    ///
    /// Returns an [`Exception`] if the fetch, the execute slot or the
    /// memory-access slot faults. The faulting instruction is dropped; older
    /// instructions have still shifted and committed. Whether this cycle
    /// committed is read from [`last_commit`](CpuCore::last_commit), which is
    /// cleared at the start of every cycle.
    pub fn step(&mut self) -> Result<StepReport, Exception> {
        self.cycle(true)
    }

    /// Steps without fetching until every slot is empty.
    ///
    /// Returns the commits made while draining, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an [`Exception`] if an in-flight load or store faults.
    pub fn drain(&mut self) -> Result<Vec<Commit>, Exception> {
        let mut commits = Vec::new();
        while !self.pipeline.is_empty() {
            commits.extend(self.cycle(false)?.commit);
        }
        Ok(commits)
    }

    /// Steps until an `ECALL`/`EBREAK` is executed, then drains the pipeline.
    ///
    /// The report carries every commit made on the way. Its `halt` is `None`
    /// if `max_cycles` steps elapse without a halt; the pipeline is not
    /// drained in that case.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Exception`] raised. Commits of the faulting
    /// cycle are visible through [`last_commit`](CpuCore::last_commit).
    pub fn run(&mut self, max_cycles: u64) -> Result<RunReport, Exception> {
        let mut report = RunReport::default();
        for _ in 0..max_cycles {
            let step = self.step()?;
            report.commits.extend(step.commit);
            if let Some(halt) = step.halt {
                report.commits.extend(self.drain()?);
                report.halt = Some(halt);
                break;
            }
        }
        Ok(report)
    }

    fn cycle(&mut self, fetch: bool) -> Result<StepReport, Exception> {
        self.stats.cycles += 1;
        self.last_commit = None;
        let mut report = StepReport {
            cycle: self.stats.cycles,
            ..StepReport::default()
        };

        if self.pipeline.shift().is_some() {
            self.stats.instructions_retired += 1;
        }
        let accessed = self.memory_access();
        report.commit = self.writeback();
        accessed?;

        if fetch {
            let entry = self.fetch_and_execute()?;
            report.issued = Some(entry.inst.pc);
            report.halt = match entry.ctrl.class {
                InstClass::Ecall => Some(HaltReason::EnvironmentCall { pc: entry.inst.pc }),
                InstClass::Ebreak => Some(HaltReason::Breakpoint { pc: entry.inst.pc }),
                _ => None,
            };
        }
        Ok(report)
    }

    fn fetch_and_execute(&mut self) -> Result<StageEntry, Exception> {
        let pc = self.pc;
        let word = self
            .bus
            .fetch(pc)
            .map_err(|trap| self.fault(pc, ExceptionStage::Fetch, trap))?;
        let inst = decode(word, pc);
        tracing::trace!(
            pc = format_args!("{pc:#010x}"),
            raw = format_args!("{word:#010x}"),
            "fetch"
        );

        let ctrl = ControlSignals::decode(&inst)
            .map_err(|trap| self.fault(pc, ExceptionStage::Execute, trap))?;
        let hazards = HazardUnit::detect(&inst, &self.pipeline);
        let operands = ForwardingMux::operands(&inst, &ctrl, hazards, &self.regs, &self.pipeline);
        let executed = Self::execute(&inst, &ctrl, &operands)
            .map_err(|trap| self.fault(pc, ExceptionStage::Execute, trap))?;

        self.count_forwards(hazards);
        if executed.redirected {
            self.stats.taken_transfers += 1;
        }

        let entry = StageEntry {
            inst,
            ctrl,
            hazards,
            operands,
            result: executed.result,
        };
        let _ = self.pipeline.issue(entry);
        self.pc = executed.next_pc;
        Ok(entry)
    }

    fn execute(
        inst: &Instruction,
        ctrl: &ControlSignals,
        ops: &Operands,
    ) -> Result<Executed, Trap> {
        let fallthrough = inst.pc.wrapping_add(4);
        let straight = |result| Executed {
            result,
            next_pc: fallthrough,
            redirected: false,
        };

        let executed = match ctrl.class {
            InstClass::Alu => straight(Alu::compute(inst, ops.a, ops.b)?),
            InstClass::Load | InstClass::Store => straight(Lsu::address(ops.a, ops.b)),
            InstClass::Branch => {
                let taken = Bru::taken(inst.funct3, ops.a, ops.rs2)
                    .ok_or(Trap::IllegalInstruction(inst.raw))?;
                Executed {
                    result: 0,
                    next_pc: if taken {
                        inst.pc.wrapping_add(ops.b)
                    } else {
                        fallthrough
                    },
                    redirected: taken,
                }
            }
            InstClass::Jal => Executed {
                result: fallthrough,
                next_pc: ops.a.wrapping_add(ops.b),
                redirected: true,
            },
            InstClass::Jalr => Executed {
                result: fallthrough,
                next_pc: ops.a.wrapping_add(ops.b) & !1,
                redirected: true,
            },
            InstClass::Fence | InstClass::Ecall | InstClass::Ebreak => straight(0),
        };
        Ok(executed)
    }
}

impl<M> CpuCore<M> {
    /// Records and logs a fault, returning the exception to surface.
    pub(crate) fn fault(&mut self, pc: u32, stage: ExceptionStage, trap: Trap) -> Exception {
        self.stats.traps += 1;
        tracing::warn!(
            pc = format_args!("{pc:#010x}"),
            ?stage,
            %trap,
            "exception"
        );
        Exception { pc, stage, trap }
    }

    fn count_forwards(&mut self, hazards: OperandHazards) {
        for record in [hazards.rs1, hazards.rs2] {
            match record {
                HazardRecord::PendingAt(ProducerSlot::MemAccess) => self.stats.forwards_mem += 1,
                HazardRecord::PendingAt(ProducerSlot::Writeback) => self.stats.forwards_wb += 1,
                HazardRecord::NoHazard => {}
            }
        }
    }
}
