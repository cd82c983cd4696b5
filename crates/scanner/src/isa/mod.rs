//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the field extraction, opcode constants and decoding logic needed
//! to recognise RISC-V SYSTEM-opcode instructions. Every other major opcode is
//! outside the scanner's scope and is skipped without decoding.
//!
//! # Modules
//!
//! * `instruction`: Bit-field extraction for 32-bit encodings.
//! * `privileged`: SYSTEM opcode, funct3 and trap/return codes.
//! * `system`: The SYSTEM decoder and its decoded-instruction types.

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Privileged architecture definitions (system opcode, CSR funct3 codes, xRET codes).
pub mod privileged;

/// SYSTEM instruction decoding (trap/return, CSR access, unknown).
pub mod system;

pub use system::{CsrAccess, CsrOp, SystemInstruction, TrapReturn, UnknownSystem, decode};
