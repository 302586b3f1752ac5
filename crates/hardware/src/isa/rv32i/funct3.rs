//! `funct3` selectors (bits 14-12).
//!
//! Grouped by the major opcode that gives them meaning; the same bit pattern
//! names a different operation under each opcode.

// Loads (OP_LOAD). Bit 2 set means zero-extend.

/// `lb`: byte, sign-extended.
pub const LB: u32 = 0b000;
/// `lh`: half-word, sign-extended.
pub const LH: u32 = 0b001;
/// `lw`: full word.
pub const LW: u32 = 0b010;
/// `lbu`: byte, zero-extended.
pub const LBU: u32 = 0b100;
/// `lhu`: half-word, zero-extended.
pub const LHU: u32 = 0b101;

// Stores (OP_STORE).

/// `sb`: low byte of rs2.
pub const SB: u32 = 0b000;
/// `sh`: low half-word of rs2.
pub const SH: u32 = 0b001;
/// `sw`: all of rs2.
pub const SW: u32 = 0b010;

// Branches (OP_BRANCH). 0b010 and 0b011 are reserved.

/// `beq`: rs1 == rs2.
pub const BEQ: u32 = 0b000;
/// `bne`: rs1 != rs2.
pub const BNE: u32 = 0b001;
/// `blt`: rs1 < rs2 as signed.
pub const BLT: u32 = 0b100;
/// `bge`: rs1 >= rs2 as signed.
pub const BGE: u32 = 0b101;
/// `bltu`: rs1 < rs2 as unsigned.
pub const BLTU: u32 = 0b110;
/// `bgeu`: rs1 >= rs2 as unsigned.
pub const BGEU: u32 = 0b111;

// Arithmetic (OP_REG and OP_IMM).

/// `add`/`sub` (`funct7` picks, register form only) and `addi`.
pub const ADD_SUB: u32 = 0b000;
/// `sll`/`slli`.
pub const SLL: u32 = 0b001;
/// `slt`/`slti`.
pub const SLT: u32 = 0b010;
/// `sltu`/`sltiu`.
pub const SLTU: u32 = 0b011;
/// `xor`/`xori`.
pub const XOR: u32 = 0b100;
/// `srl`/`sra` and their immediate forms; `funct7` picks.
pub const SRL_SRA: u32 = 0b101;
/// `or`/`ori`.
pub const OR: u32 = 0b110;
/// `and`/`andi`.
pub const AND: u32 = 0b111;

// Single-encoding opcodes.

/// Only legal value under OP_JALR.
pub const JALR: u32 = 0b000;
/// Only legal value under OP_MISC_MEM.
pub const FENCE: u32 = 0b000;
/// `ecall`/`ebreak` under OP_SYSTEM; bit 20 tells them apart.
pub const PRIV: u32 = 0b000;
