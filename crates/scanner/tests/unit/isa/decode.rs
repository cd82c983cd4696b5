//! SYSTEM Decode Tests.
//!
//! Verifies that `decode()` recognises every trap/return and CSR form,
//! keeps unknown SYSTEM encodings distinct, and ignores other opcodes.
//!
//! # Coverage Matrix
//!
//! - funct3 = 0:       ECALL, EBREAK, MRET, SRET, URET, unrecognised imm12
//! - funct3 = 1,2,3:   CSRRW, CSRRS, CSRRC
//! - funct3 = 4:       reserved, always unknown
//! - funct3 = 5,6,7:   CSRRWI, CSRRSI, CSRRCI
//! - opcode != 0x73:   not decoded

use csrscan_core::isa::privileged::opcodes::*;
use csrscan_core::isa::system::UNKNOWN_SYSTEM_LABEL;
use csrscan_core::isa::{CsrAccess, CsrOp, SystemInstruction, TrapReturn, UnknownSystem, decode};
use proptest::prelude::*;
use rstest::rstest;

use crate::common::{InstructionBuilder, NOP};

#[rstest]
#[case(ECALL, TrapReturn::Ecall, "ECALL")]
#[case(EBREAK, TrapReturn::Ebreak, "EBREAK")]
#[case(MRET, TrapReturn::Mret, "MRET")]
#[case(SRET, TrapReturn::Sret, "SRET")]
#[case(URET, TrapReturn::Uret, "URET")]
fn test_trap_return_forms(#[case] inst: u32, #[case] kind: TrapReturn, #[case] text: &str) {
    let decoded = decode(inst);
    assert_eq!(decoded, Some(SystemInstruction::TrapReturn(kind)));
    let decoded = decoded.unwrap();
    assert_eq!(decoded.to_string(), text);
    assert_eq!(decoded.type_label(), text);
    assert_eq!(decoded.csr_address(), None);
    assert!(!decoded.is_unknown());
}

#[test]
fn test_ecall_encoding() {
    assert_eq!(
        decode(0x00000073),
        Some(SystemInstruction::TrapReturn(TrapReturn::Ecall))
    );
}

#[rstest]
#[case(CSRRW, CsrOp::Csrrw, "CSRRW")]
#[case(CSRRS, CsrOp::Csrrs, "CSRRS")]
#[case(CSRRC, CsrOp::Csrrc, "CSRRC")]
#[case(CSRRWI, CsrOp::Csrrwi, "CSRRWI")]
#[case(CSRRSI, CsrOp::Csrrsi, "CSRRSI")]
#[case(CSRRCI, CsrOp::Csrrci, "CSRRCI")]
fn test_csr_forms(#[case] funct3: u8, #[case] op: CsrOp, #[case] mnemonic: &str) {
    let inst = InstructionBuilder::new()
        .funct3(u32::from(funct3))
        .rd(7)
        .rs1(19)
        .imm12(0x341)
        .build();
    let decoded = decode(inst).unwrap();
    assert_eq!(
        decoded,
        SystemInstruction::CsrAccess(CsrAccess {
            op,
            csr: 0x341,
            rd: 7,
            rs1_or_imm: 19,
        })
    );
    assert_eq!(decoded.type_label(), mnemonic);
    assert_eq!(decoded.csr_address(), Some(0x341));
    assert_eq!(
        decoded.to_string(),
        format!("{mnemonic} (rd=x7, csr=0x341, rs1/x=19)")
    );
}

#[test]
fn test_csrrw_satp_rs1_one() {
    let decoded = decode(0x18009073).unwrap();
    assert_eq!(decoded.to_string(), "CSRRW (rd=x0, csr=0x180, rs1/x=1)");
}

#[test]
fn test_csrrw_satp_rs1_five() {
    // Bits 15-19 of 0x18029073 are 0b00101.
    let decoded = decode(0x18029073).unwrap();
    assert_eq!(decoded.to_string(), "CSRRW (rd=x0, csr=0x180, rs1/x=5)");
    assert_eq!(decoded.csr_address(), Some(0x180));
}

#[test]
fn test_csr_display_pads_address() {
    let inst = InstructionBuilder::new().csrrsi(31, 0x001, 3).build();
    assert_eq!(
        decode(inst).unwrap().to_string(),
        "CSRRSI (rd=x31, csr=0x001, rs1/x=3)"
    );
}

#[test]
fn test_funct3_four_is_unknown() {
    let inst = InstructionBuilder::new().funct3(4).imm12(0x012).build();
    let decoded = decode(inst).unwrap();
    assert_eq!(
        decoded,
        SystemInstruction::Unknown(UnknownSystem {
            funct3: 4,
            imm12: 0x012
        })
    );
    assert!(decoded.is_unknown());
    assert_eq!(decoded.type_label(), UNKNOWN_SYSTEM_LABEL);
    assert_eq!(decoded.to_string(), "Unknown SYSTEM (funct3=100, imm=0x012)");
}

#[rstest]
#[case(0x003)]
#[case(0x105)] // WFI
#[case(0x7B2)] // DRET
#[case(0xFFF)]
fn test_unrecognised_priv_imm_is_unknown(#[case] imm12: u32) {
    let inst = InstructionBuilder::new().imm12(imm12).build();
    assert_eq!(
        decode(inst),
        Some(SystemInstruction::Unknown(UnknownSystem {
            funct3: 0,
            imm12: imm12 as u16,
        }))
    );
}

#[test]
fn test_sfence_vma_is_unknown() {
    // sfence.vma x0, x0: funct7 = 0b0001001 in the imm12 bits.
    let decoded = decode(0x12000073).unwrap();
    assert!(decoded.is_unknown());
    assert_eq!(decoded.to_string(), "Unknown SYSTEM (funct3=000, imm=0x120)");
}

#[test]
fn test_priv_forms_ignore_register_fields() {
    // ECALL-shaped immediate with non-zero rd/rs1 still decodes as ECALL.
    let inst = InstructionBuilder::new().rd(3).rs1(9).build();
    assert_eq!(
        decode(inst),
        Some(SystemInstruction::TrapReturn(TrapReturn::Ecall))
    );
}

#[rstest]
#[case(NOP)]
#[case(0x0000_0000)]
#[case(0xFFFF_FFFF)]
#[case(0x0000_0033)] // add x0, x0, x0
#[case(0x0000_0072)] // SYSTEM with bit 0 cleared
fn test_non_system_words_are_skipped(#[case] inst: u32) {
    assert_eq!(decode(inst), None);
}

proptest! {
    /// Anything whose low 7 bits are not 0x73 is never decoded.
    #[test]
    fn prop_non_system_opcode_yields_none(inst in any::<u32>()) {
        prop_assume!(inst & 0x7F != 0x73);
        prop_assert_eq!(decode(inst), None);
    }

    /// funct3 in {1,2,3,5,6,7} always yields a CSR access carrying bits 20-31.
    #[test]
    fn prop_csr_funct3_yields_access(
        upper in any::<u32>(),
        funct3 in prop::sample::select(vec![1u32, 2, 3, 5, 6, 7]),
    ) {
        let inst = (upper & !0x7FFF) | (funct3 << 12) | (upper & 0xF80) | 0x73;
        let decoded = decode(inst);
        prop_assert!(matches!(decoded, Some(SystemInstruction::CsrAccess(_))));
        prop_assert_eq!(decoded.and_then(|d| d.csr_address()), Some((inst >> 20) as u16));
    }

    /// With funct3 = 0, only the five trap/return immediates are recognised.
    #[test]
    fn prop_priv_group_recognises_five_immediates(imm12 in 0u32..0x1000, regs in 0u32..0x400) {
        let inst = (imm12 << 20) | ((regs >> 5) << 15) | ((regs & 0x1F) << 7) | 0x73;
        let decoded = decode(inst).unwrap();
        match imm12 {
            0x000 | 0x001 | 0x002 | 0x102 | 0x302 => {
                prop_assert!(matches!(decoded, SystemInstruction::TrapReturn(_)));
            }
            _ => prop_assert_eq!(
                decoded,
                SystemInstruction::Unknown(UnknownSystem { funct3: 0, imm12: imm12 as u16 })
            ),
        }
    }

    /// CSR fields are a pure projection of the word.
    #[test]
    fn prop_csr_fields_are_projections(
        rd in 0u32..32,
        rs1 in 0u32..32,
        csr in 0u32..0x1000,
        funct3 in prop::sample::select(vec![1u32, 2, 3, 5, 6, 7]),
    ) {
        let inst = InstructionBuilder::new().funct3(funct3).rd(rd).rs1(rs1).imm12(csr).build();
        match decode(inst) {
            Some(SystemInstruction::CsrAccess(access)) => {
                prop_assert_eq!(u32::from(access.rd), rd);
                prop_assert_eq!(u32::from(access.rs1_or_imm), rs1);
                prop_assert_eq!(u32::from(access.csr), csr);
                prop_assert_eq!(CsrOp::from_funct3(funct3 as u8), Some(access.op));
            }
            other => prop_assert!(false, "expected a CSR access, got {:?}", other),
        }
    }

    /// funct3 = 4 is never recognised.
    #[test]
    fn prop_funct3_four_is_unknown(upper in any::<u32>()) {
        let inst = (upper & !0x707F) | (4 << 12) | 0x73;
        let decoded = decode(inst);
        prop_assert!(decoded.is_some_and(|d| d.is_unknown()));
    }

    /// Decoding is total over SYSTEM words and every result renders.
    #[test]
    fn prop_system_words_always_decode(upper in any::<u32>()) {
        let inst = (upper & !0x7F) | 0x73;
        let decoded = decode(inst);
        prop_assert!(decoded.is_some());
        prop_assert!(!decoded.unwrap().to_string().is_empty());
    }
}
