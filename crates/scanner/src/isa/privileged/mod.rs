//! Privileged Architecture Definitions.
//!
//! Defines constants for the RISC-V Privileged Specification that the
//! SYSTEM decoder matches against.
//!
//! # Modules
//!
//! - `opcodes`: System opcode, funct3 codes and trap/return `imm12` codes.

/// System instruction opcodes (ECALL, EBREAK, xRET, CSR access).
pub mod opcodes;
