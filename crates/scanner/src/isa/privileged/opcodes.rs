//! RISC-V Privileged Architecture Opcodes.
//!
//! Defines the major opcode and function codes for SYSTEM instructions,
//! covering CSR access, environment calls, and trap returns.

/// System instruction opcode (0b1110011).
/// Used for CSR instructions, ECALL, EBREAK and xRET.
pub const OP_SYSTEM: u32 = 0b1110011;

/// funct3 selecting the trap/return group (`PRIV`); `imm12` picks the instruction.
pub const PRIV: u8 = 0b000;

/// Atomic Read/Write CSR (CSRRW).
pub const CSRRW: u8 = 0b001;
/// Atomic Read and Set Bits in CSR (CSRRS).
pub const CSRRS: u8 = 0b010;
/// Atomic Read and Clear Bits in CSR (CSRRC).
pub const CSRRC: u8 = 0b011;
/// Reserved funct3 in the SYSTEM space (hypervisor loads/stores use it); never a CSR access.
pub const RESERVED_100: u8 = 0b100;
/// Atomic Read/Write CSR Immediate (CSRRWI).
pub const CSRRWI: u8 = 0b101;
/// Atomic Read and Set Bits in CSR Immediate (CSRRSI).
pub const CSRRSI: u8 = 0b110;
/// Atomic Read and Clear Bits in CSR Immediate (CSRRCI).
pub const CSRRCI: u8 = 0b111;

/// `imm12` of Environment Call (ECALL).
/// Traps to a higher privilege level.
pub const IMM_ECALL: u16 = 0x000;

/// `imm12` of Environment Break (EBREAK).
/// Used by debuggers to cause a breakpoint trap.
pub const IMM_EBREAK: u16 = 0x001;

/// `imm12` of User Return (URET), from the withdrawn N extension.
pub const IMM_URET: u16 = 0x002;

/// `imm12` of Supervisor Return (SRET).
pub const IMM_SRET: u16 = 0x102;

/// `imm12` of Machine Return (MRET).
pub const IMM_MRET: u16 = 0x302;

/// Full encoding of ECALL.
pub const ECALL: u32 = 0x0000_0073;

/// Full encoding of EBREAK.
pub const EBREAK: u32 = 0x0010_0073;

/// Full encoding of MRET.
pub const MRET: u32 = 0x3020_0073;

/// Full encoding of SRET.
pub const SRET: u32 = 0x1020_0073;

/// Full encoding of URET.
pub const URET: u32 = 0x0020_0073;
