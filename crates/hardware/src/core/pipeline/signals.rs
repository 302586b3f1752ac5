//! Pipeline control signals and operation types.
//!
//! Everything the slots need to know about an instruction beyond its raw fields:
//! 1. **Operation Classification:** Maps opcodes to instruction classes and ALU operations.
//! 2. **Operand Selection:** Defines sources for ALU inputs (registers, PC, zero, or an
//!    immediate format) through total opcode lookup tables.
//! 3. **Memory Control:** Access width and load extension.

use crate::common::Trap;
use crate::isa::instruction::{ImmFormat, Instruction};
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Number of distinct 7-bit opcodes.
const OPCODE_SPACE: usize = 128;

/// ALU operation types for integer instructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition (also address generation and LUI/AUIPC).
    #[default]
    Add,
    /// `a - b`, wrapping.
    Sub,
    /// `a << b[4:0]`.
    Sll,
    /// 1 if `a < b` as `i32`.
    Slt,
    /// 1 if `a < b` as `u32`.
    Sltu,
    /// `a ^ b`.
    Xor,
    /// `a >> b[4:0]`, zero fill.
    Srl,
    /// `a >> b[4:0]`, sign fill.
    Sra,
    /// `a | b`.
    Or,
    /// `a & b`.
    And,
}

impl AluOp {
    /// Selects the ALU operation for an opcode and its function-code fields.
    ///
    /// Covers register-register and register-immediate arithmetic plus
    /// LUI/AUIPC. Returns `None` for any other opcode or for a function-code
    /// combination the base ISA does not define.
    pub const fn from_encoding(opcode: u32, f3: u32, f7: u32) -> Option<Self> {
        match opcode {
            opcodes::OP_REG => match (f3, f7) {
                (funct3::ADD_SUB, funct7::DEFAULT) => Some(Self::Add),
                (funct3::ADD_SUB, funct7::SUB) => Some(Self::Sub),
                (funct3::SLL, funct7::DEFAULT) => Some(Self::Sll),
                (funct3::SLT, funct7::DEFAULT) => Some(Self::Slt),
                (funct3::SLTU, funct7::DEFAULT) => Some(Self::Sltu),
                (funct3::XOR, funct7::DEFAULT) => Some(Self::Xor),
                (funct3::SRL_SRA, funct7::DEFAULT) => Some(Self::Srl),
                (funct3::SRL_SRA, funct7::SRA) => Some(Self::Sra),
                (funct3::OR, funct7::DEFAULT) => Some(Self::Or),
                (funct3::AND, funct7::DEFAULT) => Some(Self::And),
                _ => None,
            },
            opcodes::OP_IMM => match f3 {
                funct3::ADD_SUB => Some(Self::Add),
                funct3::SLT => Some(Self::Slt),
                funct3::SLTU => Some(Self::Sltu),
                funct3::XOR => Some(Self::Xor),
                funct3::OR => Some(Self::Or),
                funct3::AND => Some(Self::And),
                // Shift-immediates reuse funct7 as the upper immediate bits.
                funct3::SLL => match f7 {
                    funct7::DEFAULT => Some(Self::Sll),
                    _ => None,
                },
                funct3::SRL_SRA => match f7 {
                    funct7::DEFAULT => Some(Self::Srl),
                    funct7::SRA => Some(Self::Sra),
                    _ => None,
                },
                _ => None,
            },
            opcodes::OP_LUI | opcodes::OP_AUIPC => Some(Self::Add),
            _ => None,
        }
    }
}

/// Memory access width for load and store operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// `lb`/`lbu`/`sb`.
    Byte,
    /// `lh`/`lhu`/`sh`.
    Half,
    /// `lw`/`sw`.
    #[default]
    Word,
}

impl MemWidth {
    /// Access size in bytes.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Mask selecting the accessed bits of a register value.
    pub const fn mask(self) -> u32 {
        match self {
            Self::Byte => 0xFF,
            Self::Half => 0xFFFF,
            Self::Word => 0xFFFF_FFFF,
        }
    }
}

/// Source for ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// Use the (possibly forwarded) `rs1` value.
    #[default]
    Reg1,
    /// Use the program counter of the instruction.
    Pc,
    /// Use zero.
    Zero,
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Use the (possibly forwarded) `rs2` value.
    #[default]
    Reg2,
    /// Replace the operand with the given immediate format.
    Imm(ImmFormat),
}

/// Instruction class selected by the major opcode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InstClass {
    /// Register-register, register-immediate, LUI or AUIPC arithmetic.
    #[default]
    Alu,
    /// Memory load.
    Load,
    /// Memory store.
    Store,
    /// Conditional branch.
    Branch,
    /// Jump and link (pc-relative).
    Jal,
    /// Jump and link register.
    Jalr,
    /// Memory ordering fence (no-op in this core).
    Fence,
    /// Environment call.
    Ecall,
    /// Environment break.
    Ebreak,
}

/// Operand-B source for every opcode.
///
/// Opcodes without an immediate operand (including unassigned ones) map to
/// [`OpBSrc::Reg2`]; unassigned opcodes are rejected by
/// [`ControlSignals::decode`] before execution.
static OPERAND_B: [OpBSrc; OPCODE_SPACE] = operand_b_table();

const fn operand_b_table() -> [OpBSrc; OPCODE_SPACE] {
    let mut table = [OpBSrc::Reg2; OPCODE_SPACE];
    table[opcodes::OP_IMM as usize] = OpBSrc::Imm(ImmFormat::I);
    table[opcodes::OP_LOAD as usize] = OpBSrc::Imm(ImmFormat::I);
    table[opcodes::OP_JALR as usize] = OpBSrc::Imm(ImmFormat::I);
    table[opcodes::OP_STORE as usize] = OpBSrc::Imm(ImmFormat::S);
    table[opcodes::OP_BRANCH as usize] = OpBSrc::Imm(ImmFormat::B);
    table[opcodes::OP_LUI as usize] = OpBSrc::Imm(ImmFormat::U);
    table[opcodes::OP_AUIPC as usize] = OpBSrc::Imm(ImmFormat::U);
    table[opcodes::OP_JAL as usize] = OpBSrc::Imm(ImmFormat::J);
    table
}

impl OpBSrc {
    /// Looks up the operand-B source for an opcode.
    #[inline]
    pub fn for_opcode(opcode: u32) -> Self {
        OPERAND_B[(opcode as usize) & (OPCODE_SPACE - 1)]
    }
}

impl OpASrc {
    /// Operand-A source for an opcode.
    pub const fn for_opcode(opcode: u32) -> Self {
        match opcode {
            opcodes::OP_AUIPC | opcodes::OP_JAL => Self::Pc,
            opcodes::OP_LUI => Self::Zero,
            _ => Self::Reg1,
        }
    }
}

/// Whether an instruction of this opcode consumes `rs1`.
pub const fn reads_rs1(opcode: u32) -> bool {
    matches!(
        opcode,
        opcodes::OP_REG
            | opcodes::OP_IMM
            | opcodes::OP_LOAD
            | opcodes::OP_STORE
            | opcodes::OP_BRANCH
            | opcodes::OP_JALR
    )
}

/// Whether an instruction of this opcode consumes `rs2`.
pub const fn reads_rs2(opcode: u32) -> bool {
    matches!(
        opcode,
        opcodes::OP_REG | opcodes::OP_STORE | opcodes::OP_BRANCH
    )
}

/// Per-instruction control word.
///
/// Derived from a decoded instruction when it enters the execute slot and
/// carried with it through memory access and writeback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Instruction class.
    pub class: InstClass,
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Performs a load in the memory-access slot.
    pub mem_read: bool,
    /// Performs a store in the memory-access slot.
    pub mem_write: bool,
    /// Bytes moved by the load or store.
    pub width: MemWidth,
    /// Sign- rather than zero-extend a sub-word load.
    pub signed_load: bool,
    /// Where operand A comes from.
    pub a_src: OpASrc,
    /// Where operand B comes from.
    pub b_src: OpBSrc,
}

impl ControlSignals {
    /// Derives control signals for an instruction.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::IllegalInstruction`] when the opcode or its
    /// function-code fields do not name an RV32I instruction.
    pub fn decode(inst: &Instruction) -> Result<Self, Trap> {
        let illegal = Trap::IllegalInstruction(inst.raw);
        let base = Self {
            a_src: OpASrc::for_opcode(inst.opcode),
            b_src: OpBSrc::for_opcode(inst.opcode),
            ..Self::default()
        };

        let signals = match inst.opcode {
            opcodes::OP_REG | opcodes::OP_IMM | opcodes::OP_LUI | opcodes::OP_AUIPC => {
                if AluOp::from_encoding(inst.opcode, inst.funct3, inst.funct7).is_none() {
                    return Err(illegal);
                }
                Self {
                    class: InstClass::Alu,
                    reg_write: true,
                    ..base
                }
            }
            opcodes::OP_LOAD => {
                let (width, signed_load) = match inst.funct3 {
                    funct3::LB => (MemWidth::Byte, true),
                    funct3::LH => (MemWidth::Half, true),
                    funct3::LW => (MemWidth::Word, true),
                    funct3::LBU => (MemWidth::Byte, false),
                    funct3::LHU => (MemWidth::Half, false),
                    _ => return Err(illegal),
                };
                Self {
                    class: InstClass::Load,
                    reg_write: true,
                    mem_read: true,
                    width,
                    signed_load,
                    ..base
                }
            }
            opcodes::OP_STORE => {
                let width = match inst.funct3 {
                    funct3::SB => MemWidth::Byte,
                    funct3::SH => MemWidth::Half,
                    funct3::SW => MemWidth::Word,
                    _ => return Err(illegal),
                };
                Self {
                    class: InstClass::Store,
                    mem_write: true,
                    width,
                    ..base
                }
            }
            opcodes::OP_BRANCH => match inst.funct3 {
                funct3::BEQ | funct3::BNE | funct3::BLT | funct3::BGE | funct3::BLTU
                | funct3::BGEU => Self {
                    class: InstClass::Branch,
                    ..base
                },
                _ => return Err(illegal),
            },
            opcodes::OP_JAL => Self {
                class: InstClass::Jal,
                reg_write: true,
                ..base
            },
            opcodes::OP_JALR if inst.funct3 == funct3::JALR => Self {
                class: InstClass::Jalr,
                reg_write: true,
                ..base
            },
            opcodes::OP_MISC_MEM if inst.funct3 == funct3::FENCE => Self {
                class: InstClass::Fence,
                ..base
            },
            opcodes::OP_SYSTEM => match inst.raw {
                opcodes::ECALL => Self {
                    class: InstClass::Ecall,
                    ..base
                },
                opcodes::EBREAK => Self {
                    class: InstClass::Ebreak,
                    ..base
                },
                _ => return Err(illegal),
            },
            _ => return Err(illegal),
        };
        Ok(signals)
    }
}
