//! Common utilities and types used throughout the scanner.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Word width, CSR address-space size and report placeholders.
//! 2. **Error Handling:** The [`ScanError`] type returned by fallible operations.

/// Common constants used throughout the scanner.
pub mod constants;

/// Error types for loading, scanning and writing.
pub mod error;

pub use error::ScanError;
