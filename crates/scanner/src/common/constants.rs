//! Global Scanner Constants.
//!
//! This module defines constants shared across the scanner. It includes:
//! 1. **Stream Constants:** Instruction word width and stride through the input.
//! 2. **CSR Constants:** Size and highest address of the 12-bit CSR address space.
//! 3. **Report Constants:** Placeholder for empty columns.

/// Size of a standard (32-bit) RISC-V instruction in bytes.
///
/// The scan loop advances by exactly this many bytes on every read.
pub const INSTRUCTION_SIZE_32: usize = 4;

/// Number of addressable Control and Status Registers (2^12).
pub const CSR_SPACE_SIZE: usize = 4096;

/// Highest valid CSR address.
pub const CSR_ADDRESS_MAX: u16 = 0xFFF;

/// Placeholder printed in report columns that carry no value for a row.
pub const EMPTY_COLUMN: &str = "-";
