//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the execute slot. It
//! handles RV32I arithmetic, logical operations, comparisons and shifts on
//! 32-bit operands with wrap-around semantics.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::common::Trap;
use crate::core::pipeline::signals::AluOp;
use crate::isa::instruction::Instruction;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Computes the result of an arithmetic instruction.
    ///
    /// The operation is selected from the instruction's opcode, `funct3` and
    /// `funct7`. For immediate forms `b` is the I-type immediate; for LUI `a`
    /// is zero and for AUIPC `a` is the pc, so both reduce to an addition.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::IllegalInstruction`] if the encoding does not name an
    /// RV32I ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rktcpu_core::core::units::alu::Alu;
    /// use rktcpu_core::isa::decode;
    ///
    /// // sub x3, x1, x2
    /// let inst = decode(0x4020_81B3, 0);
    /// assert_eq!(Alu::compute(&inst, 7, 5), Ok(2));
    /// assert_eq!(Alu::compute(&inst, 5, 7), Ok(0xFFFF_FFFE));
    /// ```
    pub fn compute(inst: &Instruction, a: u32, b: u32) -> Result<u32, Trap> {
        AluOp::from_encoding(inst.opcode, inst.funct3, inst.funct7)
            .map(|op| Self::execute(op, a, b))
            .ok_or(Trap::IllegalInstruction(inst.raw))
    }

    /// Executes an integer ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }
}
