//! Instruction-stream scanning.
//!
//! * `accumulator`: Per-scan state (trace, counters, trailing-byte warnings).
//! * `scanner`: The 4-byte-stride scan loop over slices, readers and image regions.

/// Per-scan accumulated state.
pub mod accumulator;

/// The scan loop.
pub mod scanner;

pub use accumulator::{ScanAccumulator, TraceEntry, TrailingBytes};
pub use scanner::Scanner;
