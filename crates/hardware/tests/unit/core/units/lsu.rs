//! Load/Store Unit Tests.
//!
//! Uses a mocked data memory to verify that alignment is enforced against
//! the collaborator's declared policy before it is called, that loaded
//! values are extended correctly, and that collaborator faults propagate.

use mockall::predicate::eq;
use rktcpu_core::common::Trap;
use rktcpu_core::core::pipeline::signals::MemWidth;
use rktcpu_core::core::units::lsu::Lsu;
use rktcpu_core::soc::traits::AlignmentPolicy;
use rstest::rstest;

use crate::common::mocks::memory::MockMemory;

fn mock_with_policy(policy: AlignmentPolicy) -> MockMemory {
    let mut mem = MockMemory::new();
    mem.expect_alignment().return_const(policy);
    mem
}

// ══════════════════════════════════════════════════════════
// 1. Extension
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(MemWidth::Byte, true, 0x80, 0xFFFF_FF80)]
#[case(MemWidth::Byte, false, 0x80, 0x80)]
#[case(MemWidth::Half, true, 0x8001, 0xFFFF_8001)]
#[case(MemWidth::Half, false, 0x8001, 0x8001)]
#[case(MemWidth::Word, true, 0x8000_0000, 0x8000_0000)]
fn load_extends_by_width(
    #[case] width: MemWidth,
    #[case] signed: bool,
    #[case] raw: u32,
    #[case] expected: u32,
) {
    let mut mem = mock_with_policy(AlignmentPolicy::Natural);
    mem.expect_load()
        .with(eq(0x100), eq(width))
        .times(1)
        .return_const(Ok(raw));
    assert_eq!(Lsu::load(&mut mem, 0x100, width, signed), Ok(expected));
}

#[test]
fn store_masks_value_to_width() {
    let mut mem = mock_with_policy(AlignmentPolicy::Natural);
    mem.expect_store()
        .with(eq(0x102), eq(MemWidth::Half), eq(0xBEEF))
        .times(1)
        .return_const(Ok(()));
    assert_eq!(Lsu::store(&mut mem, 0x102, MemWidth::Half, 0xDEAD_BEEF), Ok(()));
}

// ══════════════════════════════════════════════════════════
// 2. Alignment policies
// ══════════════════════════════════════════════════════════

#[test]
fn misaligned_load_never_reaches_memory() {
    let mut mem = mock_with_policy(AlignmentPolicy::Natural);
    mem.expect_load().never();
    assert_eq!(
        Lsu::load(&mut mem, 0x102, MemWidth::Word, true),
        Err(Trap::MisalignedAccess(0x102))
    );
}

#[test]
fn misaligned_store_never_reaches_memory() {
    let mut mem = mock_with_policy(AlignmentPolicy::WithinWord);
    mem.expect_store().never();
    assert_eq!(
        Lsu::store(&mut mem, 0x103, MemWidth::Half, 1),
        Err(Trap::MisalignedAccess(0x103))
    );
}

#[rstest]
#[case(AlignmentPolicy::Natural, 0x101, MemWidth::Half, false)]
#[case(AlignmentPolicy::WithinWord, 0x101, MemWidth::Half, true)]
#[case(AlignmentPolicy::WithinWord, 0x103, MemWidth::Half, false)]
#[case(AlignmentPolicy::WithinWord, 0x101, MemWidth::Word, false)]
#[case(AlignmentPolicy::Unrestricted, 0x103, MemWidth::Word, true)]
#[case(AlignmentPolicy::Natural, 0x103, MemWidth::Byte, true)]
fn policy_matrix(
    #[case] policy: AlignmentPolicy,
    #[case] addr: u32,
    #[case] width: MemWidth,
    #[case] accepted: bool,
) {
    let mut mem = mock_with_policy(policy);
    mem.expect_load().return_const(Ok(0));
    assert_eq!(Lsu::load(&mut mem, addr, width, false).is_ok(), accepted);
}

// ══════════════════════════════════════════════════════════
// 3. Collaborator faults
// ══════════════════════════════════════════════════════════

#[test]
fn collaborator_fault_propagates_unchanged() {
    let mut mem = mock_with_policy(AlignmentPolicy::Natural);
    mem.expect_load()
        .return_const(Err(Trap::OutOfBounds(0x4000)));
    assert_eq!(
        Lsu::load(&mut mem, 0x4000, MemWidth::Word, false),
        Err(Trap::OutOfBounds(0x4000))
    );
}

#[test]
fn effective_address_wraps() {
    assert_eq!(Lsu::address(0xFFFF_FFF0, 0x20), 0x10);
    assert_eq!(Lsu::address(0x10, (-16_i32) as u32), 0);
}
