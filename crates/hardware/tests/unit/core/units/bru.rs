//! Branch Unit Tests.

use rktcpu_core::core::units::bru::Bru;
use rktcpu_core::isa::rv32i::funct3;
use rstest::rstest;

#[rstest]
#[case(funct3::BEQ, 5, 5, true)]
#[case(funct3::BEQ, 5, 6, false)]
#[case(funct3::BNE, 5, 6, true)]
#[case(funct3::BNE, 5, 5, false)]
#[case(funct3::BLT, 0xFFFF_FFFF, 0, true)]
#[case(funct3::BLT, 0, 0xFFFF_FFFF, false)]
#[case(funct3::BGE, 0, 0xFFFF_FFFF, true)]
#[case(funct3::BGE, 7, 7, true)]
#[case(funct3::BLTU, 0, 0xFFFF_FFFF, true)]
#[case(funct3::BLTU, 0xFFFF_FFFF, 0, false)]
#[case(funct3::BGEU, 0xFFFF_FFFF, 0, true)]
#[case(funct3::BGEU, 3, 4, false)]
fn branch_conditions(#[case] f3: u32, #[case] rs1: u32, #[case] rs2: u32, #[case] taken: bool) {
    assert_eq!(Bru::taken(f3, rs1, rs2), Some(taken));
}

#[test]
fn reserved_funct3_is_rejected() {
    assert_eq!(Bru::taken(0b010, 0, 0), None);
    assert_eq!(Bru::taken(0b011, 0, 0), None);
}
