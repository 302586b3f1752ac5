//! Instruction fields.
//!
//! Bit-slice accessors for raw words and the decoded [`Instruction`] record
//! that travels through the pipeline slots.

/// Returns `len` bits of `word` starting at bit `lo`, right-aligned.
///
/// # Examples
///
/// ```
/// use rktcpu_core::isa::instruction::bits;
///
/// assert_eq!(bits(0b1011_0000, 4, 3), 0b011);
/// ```
#[inline(always)]
pub const fn bits(word: u32, lo: u32, len: u32) -> u32 {
    (word >> lo) & ((1 << len) - 1)
}

/// Field accessors on a raw instruction word.
pub trait InstructionBits {
    /// Bits 6-0.
    fn opcode(&self) -> u32;
    /// Bits 11-7. Stores and branches carry immediate bits here instead.
    fn rd(&self) -> usize;
    /// Bits 19-15.
    fn rs1(&self) -> usize;
    /// Bits 24-20.
    fn rs2(&self) -> usize;
    /// Bits 14-12.
    fn funct3(&self) -> u32;
    /// Bits 31-25.
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        bits(*self, 0, 7)
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        bits(*self, 7, 5) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        bits(*self, 15, 5) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        bits(*self, 20, 5) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        bits(*self, 12, 3)
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        bits(*self, 25, 7)
    }
}

/// Immediate encoding formats of the base ISA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImmFormat {
    /// I-type: `imm[11:0]` in bits 31-20.
    I,
    /// S-type: `imm[11:5]` in bits 31-25, `imm[4:0]` in bits 11-7.
    S,
    /// B-type: 13-bit even branch offset.
    B,
    /// U-type: upper 20 bits, low 12 bits zero.
    U,
    /// J-type: 21-bit even jump offset.
    J,
}

/// Decoded instruction record.
///
/// Immutable view of a fetched word. All five immediates are computed for
/// every word; which one is meaningful depends on the opcode class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Program counter the word was fetched from.
    pub pc: u32,
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Sign-extended I-type immediate.
    pub itype: i32,
    /// Sign-extended S-type immediate.
    pub stype: i32,
    /// U-type immediate (already shifted into bits 31-12).
    pub utype: i32,
    /// Sign-extended B-type immediate.
    pub btype: i32,
    /// Sign-extended J-type immediate.
    pub jtype: i32,
}

impl Instruction {
    /// Returns the immediate for the given encoding format.
    #[inline]
    pub const fn imm(&self, format: ImmFormat) -> i32 {
        match format {
            ImmFormat::I => self.itype,
            ImmFormat::S => self.stype,
            ImmFormat::U => self.utype,
            ImmFormat::B => self.btype,
            ImmFormat::J => self.jtype,
        }
    }
}
