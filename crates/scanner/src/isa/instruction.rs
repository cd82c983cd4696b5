//! Instruction encoding utilities.
//!
//! Provides bit extraction functions for the I-type fields a SYSTEM
//! instruction is built from:
//!
//! `imm[11:0] | rs1 | funct3 | rd | opcode`

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the CSR address / `imm12` field (bits 20-31).
pub const CSR_MASK: u32 = 0xFFF;

/// Bit shift of the destination register field.
const RD_SHIFT: u32 = 7;
/// Bit shift of the funct3 field.
const FUNCT3_SHIFT: u32 = 12;
/// Bit shift of the first source register field.
const RS1_SHIFT: u32 = 15;
/// Bit shift of the CSR address / `imm12` field.
const CSR_SHIFT: u32 = 20;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every accessor is a pure projection of the word: bits outside the
/// field never influence the result.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Returns the 5-bit register index (0-31).
    fn rd(&self) -> u8;

    /// Extracts the first source register field (bits 15-19).
    ///
    /// For the immediate CSR forms this is the 5-bit `uimm` instead; the
    /// field is returned raw either way.
    fn rs1(&self) -> u8;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u8;

    /// Extracts the CSR address field (bits 20-31).
    ///
    /// For `funct3 == 0` the same bits select ECALL, EBREAK or an xRET.
    fn csr(&self) -> u16;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> u8 {
        ((self >> RD_SHIFT) & RD_MASK) as u8
    }

    #[inline(always)]
    fn rs1(&self) -> u8 {
        ((self >> RS1_SHIFT) & RS1_MASK) as u8
    }

    #[inline(always)]
    fn funct3(&self) -> u8 {
        ((self >> FUNCT3_SHIFT) & FUNCT3_MASK) as u8
    }

    #[inline(always)]
    fn csr(&self) -> u16 {
        ((self >> CSR_SHIFT) & CSR_MASK) as u16
    }
}
