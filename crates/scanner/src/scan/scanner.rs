//! Scan loop.
//!
//! Walks an instruction stream in 4-byte strides, decodes every SYSTEM word
//! and feeds the results into a [`ScanAccumulator`]. It performs:
//! 1. **Word assembly:** Four bytes per step in the configured byte order, from offset 0.
//! 2. **Routing:** Non-SYSTEM words are skipped; known and unknown SYSTEM words are recorded.
//! 3. **Classification:** CSR accesses are looked up in the [`CsrSpace`] table.
//! 4. **Tail handling:** 1-3 leftover bytes are recorded as a warning, never padded.
//!
//! The scan does not judge whether the bytes really are code: arbitrary data
//! simply produces arbitrary classifications.

use std::io::{ErrorKind, Read};

use crate::common::ScanError;
use crate::common::constants::INSTRUCTION_SIZE_32;
use crate::config::{ScanConfig, WordOrder};
use crate::csr::CsrSpace;
use crate::image::ImageRegion;
use crate::isa::{SystemInstruction, decode};
use crate::scan::accumulator::{ScanAccumulator, TraceEntry, TrailingBytes};

/// Stateless scanner over a shared CSR table.
///
/// A `Scanner` holds no per-scan state; every scan builds its own accumulator,
/// so one scanner (and one table) can serve any number of scans.
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'t> {
    space: &'t CsrSpace,
    word_order: WordOrder,
}

impl Default for Scanner<'static> {
    fn default() -> Self {
        Self::new(CsrSpace::standard(), &ScanConfig::default())
    }
}

impl<'t> Scanner<'t> {
    /// Creates a scanner classifying against `space`.
    pub const fn new(space: &'t CsrSpace, config: &ScanConfig) -> Self {
        Self {
            space,
            word_order: config.word_order,
        }
    }

    /// Overrides the byte order used to assemble words.
    #[must_use]
    pub const fn with_word_order(mut self, word_order: WordOrder) -> Self {
        self.word_order = word_order;
        self
    }

    /// The CSR table this scanner classifies against.
    pub const fn space(&self) -> &'t CsrSpace {
        self.space
    }

    /// Scans an in-memory byte sequence from offset 0.
    pub fn scan(&self, bytes: &[u8]) -> ScanAccumulator {
        let mut acc = ScanAccumulator::new();
        self.scan_into(bytes, 0, &mut acc);
        self.log_summary(&acc);
        acc
    }

    /// Scans several regions into one accumulator.
    ///
    /// Each region is walked from its own start; reported offsets are
    /// `region.base + position`, wrapping at the top of the address space.
    pub fn scan_regions(&self, regions: &[ImageRegion<'_>]) -> ScanAccumulator {
        let mut acc = ScanAccumulator::new();
        for region in regions {
            tracing::debug!(
                region = %region.name,
                len = region.data.len(),
                "scanning region at {:#010x}",
                region.base
            );
            self.scan_into(region.data, region.base, &mut acc);
        }
        self.log_summary(&acc);
        acc
    }

    /// Scans `bytes` into an existing accumulator, numbering offsets from `base`.
    pub fn scan_into(&self, bytes: &[u8], base: u64, acc: &mut ScanAccumulator) {
        let mut chunks = bytes.chunks_exact(INSTRUCTION_SIZE_32);
        let mut offset = base;
        for chunk in &mut chunks {
            let mut word = [0u8; INSTRUCTION_SIZE_32];
            word.copy_from_slice(chunk);
            self.step(offset, word, acc);
            offset = offset.wrapping_add(INSTRUCTION_SIZE_32 as u64);
        }
        let rest = chunks.remainder();
        if !rest.is_empty() {
            Self::trailing(offset, rest.len(), acc);
        }
    }

    /// Scans a byte stream.
    ///
    /// Short reads are retried until a full word is assembled or the stream
    /// ends. An I/O fault aborts the scan with [`ScanError::Read`]; nothing
    /// scanned so far is returned.
    pub fn scan_reader<R: Read>(&self, mut reader: R) -> Result<ScanAccumulator, ScanError> {
        let mut acc = ScanAccumulator::new();
        let mut word = [0u8; INSTRUCTION_SIZE_32];
        let mut offset = 0u64;
        loop {
            let filled = fill_word(&mut reader, &mut word)
                .map_err(|source| ScanError::Read { offset, source })?;
            if filled < INSTRUCTION_SIZE_32 {
                if filled > 0 {
                    Self::trailing(offset, filled, &mut acc);
                }
                break;
            }
            self.step(offset, word, &mut acc);
            offset = offset.wrapping_add(INSTRUCTION_SIZE_32 as u64);
        }
        self.log_summary(&acc);
        Ok(acc)
    }

    /// Processes one full word.
    fn step(&self, offset: u64, bytes: [u8; INSTRUCTION_SIZE_32], acc: &mut ScanAccumulator) {
        acc.note_word();
        let raw = self.word_order.word(bytes);
        let Some(instruction) = decode(raw) else {
            return;
        };
        let class = match instruction {
            SystemInstruction::CsrAccess(access) => Some(self.space.classify(access.csr)),
            SystemInstruction::TrapReturn(_) | SystemInstruction::Unknown(_) => None,
        };
        match class {
            Some(class) => tracing::debug!(
                "{offset:#010x}: {raw:#010x} -> {instruction} | {} | {}",
                class.privilege,
                class.accessibility
            ),
            None => tracing::debug!("{offset:#010x}: {raw:#010x} -> {instruction}"),
        }
        acc.record(TraceEntry {
            offset,
            raw,
            instruction,
            class,
        });
    }

    fn trailing(offset: u64, len: usize, acc: &mut ScanAccumulator) {
        tracing::warn!(len, "incomplete instruction at end of input ({offset:#010x})");
        acc.record_trailing(TrailingBytes { offset, len });
    }

    fn log_summary(&self, acc: &ScanAccumulator) {
        tracing::info!(
            words = acc.words_scanned(),
            system = acc.system_words(),
            unknown = acc.unknown().len(),
            csr_accesses = acc.csr_accesses(),
            word_order = ?self.word_order,
            "scan complete"
        );
    }
}

/// Reads until `buf` is full or the stream ends; returns the bytes filled.
fn fill_word<R: Read>(
    reader: &mut R,
    buf: &mut [u8; INSTRUCTION_SIZE_32],
) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
