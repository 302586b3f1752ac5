//! Operand forwarding.
//!
//! Selects each source operand from the register file or from a result still
//! in flight, then routes the values into ALU operands A and B according to
//! the instruction's control signals.

use crate::common::RegisterFile;
use crate::core::pipeline::hazards::{HazardRecord, OperandHazards, ProducerSlot};
use crate::core::pipeline::latches::Pipeline;
use crate::core::pipeline::signals::{ControlSignals, OpASrc, OpBSrc};
use crate::isa::instruction::Instruction;

/// Resolved operand values for one instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    /// ALU operand A.
    pub a: u32,
    /// ALU operand B.
    pub b: u32,
    /// Resolved `rs2` value (store data and branch comparison).
    pub rs2: u32,
}

/// Forwarding multiplexer.
#[derive(Debug)]
pub struct ForwardingMux;

impl ForwardingMux {
    /// Selects the value of source register `rs`.
    ///
    /// * `NoHazard` reads the register file.
    /// * `PendingAt(MemAccess)` takes `mem_result`.
    /// * `PendingAt(Writeback)` takes `wb_result`.
    pub fn resolve(
        rs: usize,
        record: HazardRecord,
        regs: &RegisterFile,
        mem_result: u32,
        wb_result: u32,
    ) -> u32 {
        match record {
            HazardRecord::NoHazard => regs.read(rs),
            HazardRecord::PendingAt(ProducerSlot::MemAccess) => mem_result,
            HazardRecord::PendingAt(ProducerSlot::Writeback) => wb_result,
        }
    }

    /// Resolves both ALU operands and the `rs2` value for `inst`.
    pub fn operands(
        inst: &Instruction,
        ctrl: &ControlSignals,
        hazards: OperandHazards,
        regs: &RegisterFile,
        pipeline: &Pipeline,
    ) -> Operands {
        let mem_result = pipeline.memaccess.as_ref().map_or(0, |e| e.result);
        let wb_result = pipeline.writeback.as_ref().map_or(0, |e| e.result);

        let rs1 = Self::resolve(inst.rs1, hazards.rs1, regs, mem_result, wb_result);
        let rs2 = Self::resolve(inst.rs2, hazards.rs2, regs, mem_result, wb_result);

        let a = match ctrl.a_src {
            OpASrc::Reg1 => rs1,
            OpASrc::Pc => inst.pc,
            OpASrc::Zero => 0,
        };
        let b = match ctrl.b_src {
            OpBSrc::Reg2 => rs2,
            OpBSrc::Imm(format) => inst.imm(format) as u32,
        };

        if hazards.rs1.is_pending() || hazards.rs2.is_pending() {
            tracing::trace!(
                pc = format_args!("{:#010x}", inst.pc),
                rs1 = ?hazards.rs1,
                rs2 = ?hazards.rs2,
                "forwarded operands"
            );
        }

        Operands { a, b, rs2 }
    }
}
