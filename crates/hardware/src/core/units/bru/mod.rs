//! Branch resolution unit (BRU).
//!
//! Evaluates conditional branch comparisons in the execute slot. Branches
//! resolve in the same cycle they are fetched, so no prediction is needed.

use crate::isa::rv32i::funct3;

/// Branch resolution unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Evaluates the branch condition selected by `f3` on `rs1` and `rs2`.
    ///
    /// Returns `None` for a `funct3` that names no branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use rktcpu_core::core::units::bru::Bru;
    /// use rktcpu_core::isa::rv32i::funct3;
    ///
    /// assert_eq!(Bru::taken(funct3::BLT, 0xFFFF_FFFF, 0), Some(true));
    /// assert_eq!(Bru::taken(funct3::BLTU, 0xFFFF_FFFF, 0), Some(false));
    /// assert_eq!(Bru::taken(0b010, 0, 0), None);
    /// ```
    pub const fn taken(f3: u32, rs1: u32, rs2: u32) -> Option<bool> {
        match f3 {
            funct3::BEQ => Some(rs1 == rs2),
            funct3::BNE => Some(rs1 != rs2),
            funct3::BLT => Some((rs1 as i32) < (rs2 as i32)),
            funct3::BGE => Some((rs1 as i32) >= (rs2 as i32)),
            funct3::BLTU => Some(rs1 < rs2),
            funct3::BGEU => Some(rs1 >= rs2),
            _ => None,
        }
    }
}
