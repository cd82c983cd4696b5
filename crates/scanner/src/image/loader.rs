//! Image loading and region selection.
//!
//! This module turns an image file into the byte regions the scanner walks. It performs:
//! 1. **File reading:** Reads the whole image into memory, inflating gzip-compressed files.
//! 2. **Format detection:** Tells ELF containers from raw binaries by their magic.
//! 3. **Region selection:** A raw binary is one region at offset 0; an ELF image yields
//!    one region per executable section (for scanning) or per loadable section with file
//!    data (for listings), at the section's address.
//!
//! ELF handling goes only as far as locating sections; the container is not validated.

use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use object::{FileKind, Object, ObjectSection, SectionKind};
use serde::Deserialize;

use crate::common::ScanError;

/// Container format of an input image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Detect from the file contents.
    #[default]
    Auto,
    /// Flat binary; scanned from offset 0.
    Raw,
    /// ELF executable or object; executable sections are scanned.
    Elf,
}

impl ImageFormat {
    /// Resolves `Auto` against the image contents.
    pub fn resolve(self, bytes: &[u8]) -> Self {
        match self {
            Self::Auto => detect_format(bytes),
            other => other,
        }
    }
}

/// A contiguous run of instruction bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRegion<'a> {
    /// Region name (`image` for raw binaries, the section name for ELF).
    pub name: String,
    /// Offset or address reported for the first byte.
    pub base: u64,
    /// The bytes to scan.
    pub data: &'a [u8],
}

impl<'a> ImageRegion<'a> {
    /// A raw region starting at offset 0.
    pub fn raw(data: &'a [u8]) -> Self {
        Self {
            name: String::from("image"),
            base: 0,
            data,
        }
    }
}

/// Leading bytes of a gzip member.
const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Loads an image file from disk into a byte vector.
///
/// Files named `*.gz`, or starting with the gzip magic, are decompressed.
///
/// # Arguments
///
/// * `path` - Path to the image file.
///
/// # Errors
///
/// [`ScanError::Io`] when the file cannot be read or does not inflate.
pub fn read_image(path: impl AsRef<Path>) -> Result<Vec<u8>, ScanError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ScanError::io(path, e))?;
    let gz_name = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    if !gz_name && !bytes.starts_with(&GZIP_MAGIC) {
        tracing::debug!(path = %path.display(), len = bytes.len(), "image loaded");
        return Ok(bytes);
    }

    let mut inflated = Vec::new();
    let _ = GzDecoder::new(bytes.as_slice())
        .read_to_end(&mut inflated)
        .map_err(|e| ScanError::io(path, e))?;
    tracing::debug!(
        path = %path.display(),
        compressed = bytes.len(),
        len = inflated.len(),
        "gzip image inflated"
    );
    Ok(inflated)
}

/// Detects the container format from the leading bytes.
///
/// Anything that is not an ELF file is treated as a raw binary.
pub fn detect_format(bytes: &[u8]) -> ImageFormat {
    match FileKind::parse(bytes) {
        Ok(FileKind::Elf32 | FileKind::Elf64) => ImageFormat::Elf,
        _ => ImageFormat::Raw,
    }
}

/// Splits an image into scan regions.
///
/// # Arguments
///
/// * `bytes` - The whole image.
/// * `format` - Container format; `Auto` is resolved first.
///
/// # Errors
///
/// For ELF input, [`ScanError::Elf`] when the container cannot be parsed and
/// [`ScanError::NoExecutableSections`] when it holds no code.
pub fn regions(bytes: &[u8], format: ImageFormat) -> Result<Vec<ImageRegion<'_>>, ScanError> {
    match format.resolve(bytes) {
        ImageFormat::Elf => {
            elf_regions(bytes, |kind| kind == SectionKind::Text, ScanError::NoExecutableSections)
        }
        ImageFormat::Raw | ImageFormat::Auto => Ok(vec![ImageRegion::raw(bytes)]),
    }
}

/// Splits an image into the regions a memory image is initialised from.
///
/// A raw image is one region at offset 0. For ELF input every code or data
/// section with file contents is returned at its section address; sections
/// without file data (`.bss`) are left out.
///
/// # Errors
///
/// [`ScanError::Elf`] when the container cannot be parsed and
/// [`ScanError::NoLoadableSections`] when no section carries data.
pub fn loadable_regions(
    bytes: &[u8],
    format: ImageFormat,
) -> Result<Vec<ImageRegion<'_>>, ScanError> {
    match format.resolve(bytes) {
        ImageFormat::Elf => elf_regions(bytes, is_loadable, ScanError::NoLoadableSections),
        ImageFormat::Raw | ImageFormat::Auto => Ok(vec![ImageRegion::raw(bytes)]),
    }
}

const fn is_loadable(kind: SectionKind) -> bool {
    matches!(
        kind,
        SectionKind::Text
            | SectionKind::Data
            | SectionKind::ReadOnlyData
            | SectionKind::ReadOnlyDataWithRel
            | SectionKind::ReadOnlyString
            | SectionKind::Tls
    )
}

/// Collects the ELF sections of the wanted kinds in address order.
///
/// `empty` is returned when no section qualifies.
fn elf_regions(
    bytes: &[u8],
    wanted: impl Fn(SectionKind) -> bool,
    empty: ScanError,
) -> Result<Vec<ImageRegion<'_>>, ScanError> {
    let file = object::File::parse(bytes)?;
    let mut regions = Vec::new();
    for section in file.sections() {
        if !wanted(section.kind()) {
            continue;
        }
        let data = section.data()?;
        if data.is_empty() {
            continue;
        }
        let name = section.name().unwrap_or("<unnamed>").to_owned();
        tracing::debug!(
            section = %name,
            len = data.len(),
            "section at {:#010x}",
            section.address()
        );
        regions.push(ImageRegion {
            name,
            base: section.address(),
            data,
        });
    }
    if regions.is_empty() {
        return Err(empty);
    }
    regions.sort_by_key(|region| region.base);
    Ok(regions)
}
