//! Configuration system for the scanner.
//!
//! This module defines the configuration structures used to parameterize a
//! scan, the report, and the address/value listing. It provides:
//! 1. **Defaults:** Word order, report output path and listing base address.
//! 2. **Structures:** Hierarchical config for scan, report, and listing.
//! 3. **Enums:** Byte order of instruction words.
//!
//! Configuration is supplied as JSON (see [`Config::from_file`]) or taken from
//! `Config::default()`. Command-line flags override individual fields.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::ScanError;

/// Default configuration constants.
mod defaults {
    /// File the report is written to when no output is given.
    pub const REPORT_OUTPUT: &str = "csr_instructions.txt";

    /// Load address the listing starts numbering from (2 GiB, the usual RAM base).
    pub const LISTING_BASE_ADDRESS: u64 = 0x8000_0000;
}

/// Byte order used to assemble 32-bit words from the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordOrder {
    /// Most significant byte first.
    #[default]
    Big,
    /// Least significant byte first (native RISC-V memory order).
    Little,
}

impl WordOrder {
    /// Assembles a word from four bytes.
    #[inline]
    pub const fn word(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::Big => u32::from_be_bytes(bytes),
            Self::Little => u32::from_le_bytes(bytes),
        }
    }
}

/// Root configuration.
///
/// # Example (JSON)
///
/// ```
/// use csrscan_core::config::{Config, WordOrder};
///
/// let json = r#"{ "scan": { "word_order": "little" }, "report": { "show_csr_names": true } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.scan.word_order, WordOrder::Little);
/// assert!(config.report.show_csr_names);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Scan loop settings.
    #[serde(default)]
    pub scan: ScanConfig,
    /// Report rendering settings.
    #[serde(default)]
    pub report: ReportConfig,
    /// Address/value listing settings.
    #[serde(default)]
    pub listing: ListingConfig,
}

impl Config {
    /// Parses a configuration document.
    ///
    /// Missing sections and fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ScanError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ScanError::io(path, e))?;
        Self::from_json(&json)
    }
}

/// Scan loop settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScanConfig {
    /// Byte order of instruction words in the input.
    #[serde(default)]
    pub word_order: WordOrder,
}

/// Report rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// Add a `CSR Name` column with architectural register names.
    #[serde(default)]
    pub show_csr_names: bool,

    /// Path the report is written to (`-` for stdout).
    #[serde(default = "ReportConfig::default_output")]
    pub output: PathBuf,
}

impl ReportConfig {
    fn default_output() -> PathBuf {
        PathBuf::from(defaults::REPORT_OUTPUT)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_csr_names: false,
            output: Self::default_output(),
        }
    }
}

/// Address/value listing settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingConfig {
    /// Address printed for the first word.
    #[serde(default = "ListingConfig::default_base_address")]
    pub base_address: u64,

    /// Byte order used to read each word.
    #[serde(default = "ListingConfig::default_word_order")]
    pub word_order: WordOrder,
}

impl ListingConfig {
    const fn default_base_address() -> u64 {
        defaults::LISTING_BASE_ADDRESS
    }

    const fn default_word_order() -> WordOrder {
        WordOrder::Little
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            base_address: Self::default_base_address(),
            word_order: Self::default_word_order(),
        }
    }
}
