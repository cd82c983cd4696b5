//! SYSTEM instruction decoder.
//!
//! Turns one 32-bit word into a [`SystemInstruction`] when its major opcode is
//! `SYSTEM` (`0x73`). Three shapes come out of it:
//!
//! 1. **Trap/return:** `funct3 == 0` with a recognised `imm12` (ECALL, EBREAK, xRET).
//! 2. **CSR access:** `funct3` in `{1, 2, 3, 5, 6, 7}`, carrying `rd`, the CSR address and `rs1`.
//! 3. **Unknown:** any other SYSTEM encoding, keeping `funct3` and `imm12` for diagnostics.
//!
//! For the immediate CSR forms the `rs1` field holds the 5-bit `uimm`. The decoder
//! carries that field raw and does not tell the two readings apart.

use std::fmt;

use crate::isa::instruction::InstructionBits;
use crate::isa::privileged::opcodes as sys_op;

/// Instruction-type label under which unknown SYSTEM encodings are counted.
pub const UNKNOWN_SYSTEM_LABEL: &str = "Unknown SYSTEM";

/// Trap and trap-return instructions (`funct3 == 0`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrapReturn {
    /// Environment call.
    Ecall,
    /// Environment breakpoint.
    Ebreak,
    /// Return from a machine-mode trap handler.
    Mret,
    /// Return from a supervisor-mode trap handler.
    Sret,
    /// Return from a user-mode trap handler.
    Uret,
}

impl TrapReturn {
    /// Looks up the trap/return instruction selected by `imm12`.
    pub const fn from_imm12(imm12: u16) -> Option<Self> {
        match imm12 {
            sys_op::IMM_ECALL => Some(Self::Ecall),
            sys_op::IMM_EBREAK => Some(Self::Ebreak),
            sys_op::IMM_MRET => Some(Self::Mret),
            sys_op::IMM_SRET => Some(Self::Sret),
            sys_op::IMM_URET => Some(Self::Uret),
            _ => None,
        }
    }

    /// Upper-case mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Ecall => "ECALL",
            Self::Ebreak => "EBREAK",
            Self::Mret => "MRET",
            Self::Sret => "SRET",
            Self::Uret => "URET",
        }
    }
}

/// Zicsr access operations, selected by `funct3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CsrOp {
    /// Atomic read/write.
    Csrrw,
    /// Atomic read and set bits.
    Csrrs,
    /// Atomic read and clear bits.
    Csrrc,
    /// Atomic read/write, immediate source.
    Csrrwi,
    /// Atomic read and set bits, immediate source.
    Csrrsi,
    /// Atomic read and clear bits, immediate source.
    Csrrci,
}

impl CsrOp {
    /// Looks up the CSR operation for a non-zero `funct3`.
    ///
    /// Returns `None` for `funct3` values that select no CSR access (`0` and `4`).
    pub const fn from_funct3(funct3: u8) -> Option<Self> {
        match funct3 {
            sys_op::CSRRW => Some(Self::Csrrw),
            sys_op::CSRRS => Some(Self::Csrrs),
            sys_op::CSRRC => Some(Self::Csrrc),
            sys_op::CSRRWI => Some(Self::Csrrwi),
            sys_op::CSRRSI => Some(Self::Csrrsi),
            sys_op::CSRRCI => Some(Self::Csrrci),
            _ => None,
        }
    }

    /// Upper-case mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Csrrw => "CSRRW",
            Self::Csrrs => "CSRRS",
            Self::Csrrc => "CSRRC",
            Self::Csrrwi => "CSRRWI",
            Self::Csrrsi => "CSRRSI",
            Self::Csrrci => "CSRRCI",
        }
    }
}

/// A decoded CSR access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CsrAccess {
    /// Access operation.
    pub op: CsrOp,
    /// 12-bit CSR address (`imm12`).
    pub csr: u16,
    /// Destination register index (0-31).
    pub rd: u8,
    /// Raw `rs1` field: a source register, or `uimm` for the immediate forms.
    pub rs1_or_imm: u8,
}

/// A SYSTEM encoding that matches no known form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnknownSystem {
    /// The `funct3` field (0-7).
    pub funct3: u8,
    /// The `imm12` field (0-0xFFF).
    pub imm12: u16,
}

/// A decoded SYSTEM-opcode instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SystemInstruction {
    /// ECALL, EBREAK, MRET, SRET or URET.
    TrapReturn(TrapReturn),
    /// One of the six Zicsr access instructions.
    CsrAccess(CsrAccess),
    /// SYSTEM opcode with an unrecognised `funct3`/`imm12` combination.
    Unknown(UnknownSystem),
}

impl SystemInstruction {
    /// Key under which the instruction is counted in the type summary.
    pub const fn type_label(&self) -> &'static str {
        match self {
            Self::TrapReturn(kind) => kind.mnemonic(),
            Self::CsrAccess(access) => access.op.mnemonic(),
            Self::Unknown(_) => UNKNOWN_SYSTEM_LABEL,
        }
    }

    /// Returns `true` for the unknown-encoding variant.
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// CSR address referenced by the instruction, for CSR-access forms only.
    pub const fn csr_address(&self) -> Option<u16> {
        match self {
            Self::CsrAccess(access) => Some(access.csr),
            Self::TrapReturn(_) | Self::Unknown(_) => None,
        }
    }
}

impl fmt::Display for SystemInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrapReturn(kind) => f.write_str(kind.mnemonic()),
            Self::CsrAccess(access) => write!(
                f,
                "{} (rd=x{}, csr=0x{:03X}, rs1/x={})",
                access.op.mnemonic(),
                access.rd,
                access.csr,
                access.rs1_or_imm
            ),
            Self::Unknown(unknown) => write!(
                f,
                "{UNKNOWN_SYSTEM_LABEL} (funct3={:03b}, imm=0x{:03X})",
                unknown.funct3, unknown.imm12
            ),
        }
    }
}

/// Decodes a SYSTEM instruction.
///
/// Returns `None` when the word's opcode is not `SYSTEM`; the caller skips
/// such words entirely.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn decode(inst: u32) -> Option<SystemInstruction> {
    if inst.opcode() != sys_op::OP_SYSTEM {
        return None;
    }

    let funct3 = inst.funct3();
    let imm12 = inst.csr();
    let unknown = SystemInstruction::Unknown(UnknownSystem { funct3, imm12 });

    if funct3 == sys_op::PRIV {
        return Some(
            TrapReturn::from_imm12(imm12).map_or(unknown, SystemInstruction::TrapReturn),
        );
    }

    let decoded = CsrOp::from_funct3(funct3).map_or(unknown, |op| {
        SystemInstruction::CsrAccess(CsrAccess {
            op,
            csr: imm12,
            rd: inst.rd(),
            rs1_or_imm: inst.rs1(),
        })
    });
    Some(decoded)
}
