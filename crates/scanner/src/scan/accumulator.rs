//! Scan accumulator.
//!
//! Collects everything a scan learns before the report is rendered:
//! 1. **Trace:** Recognised instructions and unknown SYSTEM encodings, in scan order.
//! 2. **Instruction mix:** Occurrences per instruction type, in first-seen order.
//! 3. **CSR usage:** Occurrences per CSR address.
//! 4. **Stream bookkeeping:** Words read, SYSTEM words seen, trailing partial words.
//!
//! One accumulator belongs to exactly one scan; it is created empty, filled once
//! per SYSTEM word, and handed to the report builder at the end.

use std::collections::BTreeMap;

use crate::csr::CsrClass;
use crate::isa::SystemInstruction;

/// One SYSTEM instruction found in the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    /// Stream offset of the word (plus the region base for multi-region scans).
    pub offset: u64,
    /// Raw instruction word.
    pub raw: u32,
    /// Decoded form.
    pub instruction: SystemInstruction,
    /// Classification of the referenced CSR; `None` unless this is a CSR access.
    pub class: Option<CsrClass>,
}

/// 1-3 bytes left over at the end of a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrailingBytes {
    /// Offset of the first leftover byte.
    pub offset: u64,
    /// Number of leftover bytes (1-3).
    pub len: usize,
}

/// State accumulated over one scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanAccumulator {
    known: Vec<TraceEntry>,
    unknown: Vec<TraceEntry>,
    type_counts: Vec<(&'static str, u64)>,
    csr_counts: BTreeMap<u16, u64>,
    trailing: Vec<TrailingBytes>,
    words_scanned: u64,
}

impl ScanAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one full word read from the stream, SYSTEM or not.
    pub(crate) fn note_word(&mut self) {
        self.words_scanned += 1;
    }

    /// Records a decoded SYSTEM instruction.
    ///
    /// Unknown encodings go to the unknown list; everything else to the known
    /// trace. Only CSR accesses bump the per-address counter.
    pub fn record(&mut self, entry: TraceEntry) {
        self.bump_type(entry.instruction.type_label());
        if let Some(csr) = entry.instruction.csr_address() {
            *self.csr_counts.entry(csr).or_insert(0) += 1;
        }
        if entry.instruction.is_unknown() {
            self.unknown.push(entry);
        } else {
            self.known.push(entry);
        }
    }

    /// Records leftover bytes that did not form a full word.
    pub fn record_trailing(&mut self, trailing: TrailingBytes) {
        self.trailing.push(trailing);
    }

    fn bump_type(&mut self, label: &'static str) {
        if let Some((_, count)) = self.type_counts.iter_mut().find(|(l, _)| *l == label) {
            *count += 1;
            return;
        }
        self.type_counts.push((label, 1));
    }

    /// Recognised instructions (trap/return and CSR access) in scan order.
    pub fn known(&self) -> &[TraceEntry] {
        &self.known
    }

    /// Unknown SYSTEM encodings in scan order.
    pub fn unknown(&self) -> &[TraceEntry] {
        &self.unknown
    }

    /// Occurrences per instruction-type label, in order of first occurrence.
    pub fn type_counts(&self) -> &[(&'static str, u64)] {
        &self.type_counts
    }

    /// Instruction-type counts sorted by descending count.
    ///
    /// Ties keep their first-occurrence order.
    pub fn type_counts_by_frequency(&self) -> Vec<(&'static str, u64)> {
        let mut sorted = self.type_counts.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    /// Occurrences per CSR address, ascending by address.
    pub const fn csr_counts(&self) -> &BTreeMap<u16, u64> {
        &self.csr_counts
    }

    /// Leftover partial words, one per affected region.
    pub fn trailing(&self) -> &[TrailingBytes] {
        &self.trailing
    }

    /// Number of full 32-bit words read.
    pub const fn words_scanned(&self) -> u64 {
        self.words_scanned
    }

    /// Number of SYSTEM-opcode words seen (known plus unknown).
    pub fn system_words(&self) -> u64 {
        self.type_counts.iter().map(|(_, count)| count).sum()
    }

    /// Number of CSR-access instructions seen.
    pub fn csr_accesses(&self) -> u64 {
        self.csr_counts.values().sum()
    }

    /// Returns `true` when no SYSTEM instruction was recorded.
    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.unknown.is_empty()
    }
}
