//! Load/Store Unit (LSU).
//!
//! This module provides the Load/Store Unit, responsible for data memory
//! access. It computes effective addresses in the execute slot, then performs
//! the access against a [`DataMemory`] in the memory-access slot, checking
//! alignment first and sign- or zero-extending loaded values.
//!
//! - [`unaligned`]: Alignment checks per collaborator policy.

/// Misaligned access checks.
pub mod unaligned;

use crate::common::Trap;
use crate::core::pipeline::signals::MemWidth;
use crate::soc::traits::DataMemory;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Effective address: base register plus sign-extended offset, modulo 2^32.
    ///
    /// `offset` is the immediate already reinterpreted as a 32-bit word.
    pub const fn address(base: u32, offset: u32) -> u32 {
        base.wrapping_add(offset)
    }

    /// Loads `width` bytes at `addr` and extends them to 32 bits.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::MisalignedAccess`] if the memory's alignment policy
    /// rejects the address, or any trap raised by the memory itself.
    pub fn load<M>(mem: &mut M, addr: u32, width: MemWidth, signed: bool) -> Result<u32, Trap>
    where
        M: DataMemory + ?Sized,
    {
        unaligned::check(mem.alignment(), addr, width)?;
        let raw = mem.load(addr, width)? & width.mask();
        Ok(if signed { sign_extend(raw, width) } else { raw })
    }

    /// Stores the low `width` bytes of `value` at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::MisalignedAccess`] if the memory's alignment policy
    /// rejects the address, or any trap raised by the memory itself.
    pub fn store<M>(mem: &mut M, addr: u32, width: MemWidth, value: u32) -> Result<(), Trap>
    where
        M: DataMemory + ?Sized,
    {
        unaligned::check(mem.alignment(), addr, width)?;
        mem.store(addr, width, value & width.mask())
    }
}

/// Sign-extends a zero-extended value of `width` bytes.
const fn sign_extend(raw: u32, width: MemWidth) -> u32 {
    match width {
        MemWidth::Byte => raw as u8 as i8 as i32 as u32,
        MemWidth::Half => raw as u16 as i16 as i32 as u32,
        MemWidth::Word => raw,
    }
}
