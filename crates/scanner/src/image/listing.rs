//! Address/value listing.
//!
//! Writes an image as one `0xADDRESS 0xVALUE` line per 32-bit word, the text
//! form memory-initialisation tools consume. Unlike the scanner, a final
//! partial word is zero-padded so every byte of the image appears.
//!
//! ELF images are listed section by section, each at its own address; raw
//! images start at the configured base address.

use std::io::Write;
use std::num::ParseIntError;

use crate::common::ScanError;
use crate::common::constants::INSTRUCTION_SIZE_32;
use crate::config::{ListingConfig, WordOrder};
use crate::image::loader::{ImageFormat, loadable_regions};

/// Writes the listing of `bytes` to `out`.
///
/// Returns the number of lines written.
///
/// # Arguments
///
/// * `bytes` - The image.
/// * `config` - Base address and word byte order.
/// * `out` - Destination.
pub fn write_listing<W: Write>(
    bytes: &[u8],
    config: &ListingConfig,
    mut out: W,
) -> Result<usize, ScanError> {
    let lines = write_words(bytes, config.base_address, config.word_order, &mut out)?;
    out.flush().map_err(ScanError::Write)?;
    Ok(lines)
}

/// Writes the listing of a whole image file to `out`.
///
/// Raw images are listed from `config.base_address`. ELF images list every
/// section with file data at the section's address, in address order, and
/// ignore the base address. Returns the number of lines written.
///
/// # Errors
///
/// Region selection errors for ELF input (see [`loadable_regions`]) and
/// [`ScanError::Write`].
pub fn write_image_listing<W: Write>(
    bytes: &[u8],
    format: ImageFormat,
    config: &ListingConfig,
    mut out: W,
) -> Result<usize, ScanError> {
    let format = format.resolve(bytes);
    if format != ImageFormat::Elf {
        return write_listing(bytes, config, out);
    }

    let mut lines = 0;
    for region in loadable_regions(bytes, format)? {
        tracing::debug!(section = %region.name, base = region.base, "listing section");
        lines += write_words(region.data, region.base, config.word_order, &mut out)?;
    }
    out.flush().map_err(ScanError::Write)?;
    Ok(lines)
}

fn write_words<W: Write>(
    data: &[u8],
    start: u64,
    order: WordOrder,
    out: &mut W,
) -> Result<usize, ScanError> {
    let mut lines = 0;
    let mut address = start;
    for chunk in data.chunks(INSTRUCTION_SIZE_32) {
        let mut word = [0u8; INSTRUCTION_SIZE_32];
        word[..chunk.len()].copy_from_slice(chunk);
        let value = order.word(word);
        writeln!(out, "0x{address:08X} 0x{value:08X}").map_err(ScanError::Write)?;
        address = address.wrapping_add(INSTRUCTION_SIZE_32 as u64);
        lines += 1;
    }
    Ok(lines)
}

/// Parses an address written as `0x`-prefixed hex or decimal.
///
/// Underscore separators are accepted (`0x8000_0000`).
pub fn parse_address(text: &str) -> Result<u64, ParseIntError> {
    let clean = text.trim().replace('_', "");
    match clean
        .strip_prefix("0x")
        .or_else(|| clean.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => clean.parse(),
    }
}
