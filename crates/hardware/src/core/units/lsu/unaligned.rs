//! Misaligned access checking.
//!
//! Decides whether a data access is acceptable under the alignment policy a
//! memory collaborator declares.

use crate::common::Trap;
use crate::core::pipeline::signals::MemWidth;
use crate::soc::traits::AlignmentPolicy;

/// Bytes per 32-bit word.
const WORD_BYTES: u32 = 4;

/// Checks whether an access of `width` at `addr` is naturally aligned.
pub const fn is_aligned(addr: u32, width: MemWidth) -> bool {
    addr & (width.bytes() - 1) == 0
}

/// Checks whether an access of `width` at `addr` stays inside one word.
pub const fn within_word(addr: u32, width: MemWidth) -> bool {
    (addr % WORD_BYTES) + width.bytes() <= WORD_BYTES
}

/// Validates an access against `policy`.
///
/// # Errors
///
/// Returns [`Trap::MisalignedAccess`] with the effective address when the
/// policy rejects the access.
pub const fn check(policy: AlignmentPolicy, addr: u32, width: MemWidth) -> Result<(), Trap> {
    let ok = match policy {
        AlignmentPolicy::Natural => is_aligned(addr, width),
        AlignmentPolicy::WithinWord => within_word(addr, width),
        AlignmentPolicy::Unrestricted => true,
    };
    if ok {
        Ok(())
    } else {
        Err(Trap::MisalignedAccess(addr))
    }
}
