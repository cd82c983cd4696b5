//! Image handling around the scanner.
//!
//! * `loader`: Read (optionally gzipped) image files and pick their regions (raw or ELF).
//! * `listing`: Address/value text listing of an image, section by section for ELF.

/// Address/value listing.
pub mod listing;

/// Image file loading and region selection.
pub mod loader;

pub use loader::{ImageFormat, ImageRegion, detect_format, loadable_regions, read_image, regions};
