//! RISC-V Instruction Decoder.
//!
//! This module decodes 32-bit RV32I instruction encodings into the
//! [`Instruction`] record. It extracts the opcode, register indices and
//! function codes, and reconstructs all five immediate formats (I, S, B, U, J)
//! regardless of opcode. Decoding is total: every word decodes, and invalid
//! encodings are only rejected at execute time.

use crate::isa::instruction::{Instruction, InstructionBits, bits};

/// Splits a raw word fetched from `pc` into its fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode.
/// * `pc`   - The address the word was fetched from.
///
/// # Returns
///
/// An [`Instruction`] with every field and every immediate format populated.
///
/// # Examples
///
/// ```
/// use rktcpu_core::isa::decode::decode;
///
/// // addi x1, x0, 10
/// let inst = decode(0x00A0_0093, 0);
/// assert_eq!(inst.rd, 1);
/// assert_eq!(inst.itype, 10);
/// ```
pub fn decode(inst: u32, pc: u32) -> Instruction {
    Instruction {
        pc,
        raw: inst,
        opcode: inst.opcode(),
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        itype: decode_i_type_imm(inst),
        stype: decode_s_type_imm(inst),
        utype: decode_u_type_imm(inst),
        btype: decode_b_type_imm(inst),
        jtype: decode_j_type_imm(inst),
    }
}

/// `imm[11:0]` from bits 31-20.
const fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> 20
}

/// `imm[11:5]` from bits 31-25, `imm[4:0]` from bits 11-7.
const fn decode_s_type_imm(inst: u32) -> i32 {
    let imm = (bits(inst, 25, 7) << 5) | bits(inst, 7, 5);
    sign_extend(imm, 12)
}

/// `imm[12|10:5]` from bits 31-25, `imm[4:1|11]` from bits 11-7; bit 0 is zero.
const fn decode_b_type_imm(inst: u32) -> i32 {
    let imm = (bits(inst, 31, 1) << 12)
        | (bits(inst, 7, 1) << 11)
        | (bits(inst, 25, 6) << 5)
        | (bits(inst, 8, 4) << 1);
    sign_extend(imm, 13)
}

/// `imm[31:12]` in place; the low 12 bits are zero.
const fn decode_u_type_imm(inst: u32) -> i32 {
    (inst & !0xFFF) as i32
}

/// `imm[20|10:1|11|19:12]` from bits 31-12; bit 0 is zero.
const fn decode_j_type_imm(inst: u32) -> i32 {
    let imm = (bits(inst, 31, 1) << 20)
        | (bits(inst, 12, 8) << 12)
        | (bits(inst, 20, 1) << 11)
        | (bits(inst, 21, 10) << 1);
    sign_extend(imm, 21)
}

/// Sign-extends the low `width` bits of `val`.
const fn sign_extend(val: u32, width: u32) -> i32 {
    let shift = u32::BITS - width;
    ((val << shift) as i32) >> shift
}
