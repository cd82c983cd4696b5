//! Scanner error definitions.
//!
//! This module defines the failures that abort a scan or a listing. It covers:
//! 1. **I/O Faults:** Opening, reading or inflating a named input file, or a stream failing mid-scan.
//! 2. **Input Containers:** ELF images that cannot be parsed or carry no code.
//! 3. **Configuration:** Malformed JSON configuration.
//!
//! A trailing partial word and an unrecognised SYSTEM encoding are not errors; both are
//! recorded in the scan accumulator and surface in the report instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading input, scanning a stream, or writing output.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A named file could not be opened or read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path of the file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The input stream failed part-way through a scan.
    ///
    /// The scan is abandoned; no partial accumulator is handed back.
    #[error("input stream failed at offset {offset:#010x}: {source}")]
    Read {
        /// Stream offset of the word being read when the fault occurred.
        offset: u64,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration document was not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The input looked like an ELF container but could not be parsed.
    #[error("malformed ELF image: {0}")]
    Elf(#[from] object::read::Error),

    /// The ELF container parsed but has no executable section with file data.
    #[error("ELF image has no executable sections to scan")]
    NoExecutableSections,

    /// The ELF container parsed but has no code or data section with file data to list.
    #[error("ELF image has no loadable sections to list")]
    NoLoadableSections,

    /// Writing the report or listing failed.
    #[error("could not write output: {0}")]
    Write(#[source] io::Error),
}

impl ScanError {
    /// Wraps an I/O error raised while accessing `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
