//! Major opcodes (bits 6-0) of the RV32I base set.
//!
//! Bits 1-0 are always `0b11` for 32-bit encodings. Any opcode not listed
//! here is illegal on this core.

/// `lb`, `lh`, `lw`, `lbu`, `lhu`.
pub const OP_LOAD: u32 = 0b0000011;

/// `fence`.
pub const OP_MISC_MEM: u32 = 0b0001111;

/// Register-immediate arithmetic, shift-immediates included.
pub const OP_IMM: u32 = 0b0010011;

/// `auipc`.
pub const OP_AUIPC: u32 = 0b0010111;

/// `sb`, `sh`, `sw`.
pub const OP_STORE: u32 = 0b0100011;

/// Register-register arithmetic.
pub const OP_REG: u32 = 0b0110011;

/// `lui`.
pub const OP_LUI: u32 = 0b0110111;

/// Conditional branches.
pub const OP_BRANCH: u32 = 0b1100011;

/// `jalr`.
pub const OP_JALR: u32 = 0b1100111;

/// `jal`.
pub const OP_JAL: u32 = 0b1101111;

/// `ecall`, `ebreak`.
pub const OP_SYSTEM: u32 = 0b1110011;

/// Complete `ecall` word. No other SYSTEM encoding but [`EBREAK`] is accepted.
pub const ECALL: u32 = 0x0000_0073;

/// Complete `ebreak` word.
pub const EBREAK: u32 = 0x0010_0073;
