//! RISC-V SYSTEM-instruction and CSR address-space scanner.
//!
//! This crate scans raw RISC-V machine code for SYSTEM-opcode instructions and
//! reports how the code uses Control and Status Registers:
//! 1. **ISA:** Field extraction and decoding of ECALL/EBREAK/xRET and the Zicsr accesses.
//! 2. **CSR:** Classification of the 12-bit CSR space by privilege level and accessibility.
//! 3. **Scan:** A 4-byte-stride pass over a byte stream that accumulates trace and counters.
//! 4. **Report:** Tab-separated trace tables plus instruction-type and CSR-address summaries.
//! 5. **Image:** Loading raw or ELF images and producing address/value listings.
//!
//! ```
//! use csrscan_core::{CsrSpace, ReportOptions, Scanner, report};
//!
//! // csrrw x0, satp, x1
//! let acc = Scanner::default().scan(&0x1800_9073_u32.to_be_bytes());
//! let text = report::render(&acc, CsrSpace::standard(), ReportOptions::default());
//! assert!(text.contains("CSRRW (rd=x0, csr=0x180, rs1/x=1)\tSupervisor-Level\tStandard read/write"));
//! ```

/// Common types and constants (errors, word size, CSR space size).
pub mod common;
/// Scanner configuration (word order, report options, listing defaults).
pub mod config;
/// CSR address-space classification and register names.
pub mod csr;
/// Image loading and address/value listings.
pub mod image;
/// Instruction set (field extraction, SYSTEM decoding).
pub mod isa;
/// Report rendering.
pub mod report;
/// Scan loop and accumulated state.
pub mod scan;

/// Error returned by every fallible operation in the crate.
pub use crate::common::ScanError;
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// CSR classification table; `CsrSpace::standard()` is built once and shared.
pub use crate::csr::CsrSpace;
/// Optional report columns.
pub use crate::report::ReportOptions;
/// Accumulated result of one scan.
pub use crate::scan::ScanAccumulator;
/// The scan loop.
pub use crate::scan::Scanner;
