//! Scan report rendering.
//!
//! Formats a finished [`ScanAccumulator`] as a tab-separated text report. The
//! sections are, in order:
//! 1. **Known instructions:** Offset, raw word, decoded text, privilege, accessibility.
//! 2. **Unknown SYSTEM instructions:** Only when any were seen.
//! 3. **Warnings:** One line per trailing partial word.
//! 4. **Instruction type summary:** Descending by count, with a total row.
//! 5. **CSR address summary:** Grouped by (privilege, accessibility), with subtotals and a total.
//!
//! Rendering is pure formatting; nothing is decoded or re-scanned here.

use std::collections::BTreeMap;
use std::fmt;

use crate::common::constants::EMPTY_COLUMN;
use crate::config::ReportConfig;
use crate::csr::{CsrClass, CsrSpace, csr_name};
use crate::scan::{ScanAccumulator, TraceEntry};

/// Title line opening every report.
pub const REPORT_TITLE: &str = "=== RISC-V System/CSR Instructions Scan Results ===";

/// Render options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Append a `CSR Name` column to the trace and CSR summary tables.
    pub show_csr_names: bool,
}

impl From<&ReportConfig> for ReportOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            show_csr_names: config.show_csr_names,
        }
    }
}

/// A renderable view over a finished scan.
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    acc: &'a ScanAccumulator,
    space: &'a CsrSpace,
    options: ReportOptions,
}

impl<'a> Report<'a> {
    /// Creates a report over `acc`, grouping CSRs with `space`.
    pub const fn new(acc: &'a ScanAccumulator, space: &'a CsrSpace, options: ReportOptions) -> Self {
        Self {
            acc,
            space,
            options,
        }
    }

    fn name_column(&self, csr: Option<u16>) -> String {
        if !self.options.show_csr_names {
            return String::new();
        }
        let name = csr.and_then(csr_name).unwrap_or(EMPTY_COLUMN);
        format!("\t{name}")
    }

    fn write_known(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name_header, name_rule) = if self.options.show_csr_names {
            ("\tCSR Name", "\t--------")
        } else {
            ("", "")
        };
        writeln!(f, "\n--- Known CSR Instructions ---")?;
        writeln!(
            f,
            "Offset\tInstruction\tDecoded Instruction\tPrivilege Level\tUse and Accessibility{name_header}"
        )?;
        writeln!(
            f,
            "----------\t----------\t------------------\t--------------\t-------------------{name_rule}"
        )?;
        for entry in self.acc.known() {
            let (privilege, accessibility) = entry.class.map_or((EMPTY_COLUMN, EMPTY_COLUMN), |c| {
                (c.privilege.label(), c.accessibility.label())
            });
            writeln!(
                f,
                "{}\t{privilege}\t{accessibility}{}",
                TraceRow(entry),
                self.name_column(entry.instruction.csr_address())
            )?;
        }
        Ok(())
    }

    fn write_unknown(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.acc.unknown().is_empty() {
            return Ok(());
        }
        writeln!(f, "\n--- Unknown SYSTEM Instructions ---")?;
        writeln!(f, "Offset\tInstruction\tDecoded Instruction")?;
        writeln!(f, "----------\t----------\t------------------")?;
        for entry in self.acc.unknown() {
            writeln!(f, "{}", TraceRow(entry))?;
        }
        Ok(())
    }

    fn write_warnings(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for trailing in self.acc.trailing() {
            writeln!(
                f,
                "\nWarning: Incomplete instruction at end of input ({} trailing byte{} at 0x{:08X} ignored).",
                trailing.len,
                if trailing.len == 1 { "" } else { "s" },
                trailing.offset
            )?;
        }
        Ok(())
    }

    fn write_type_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Instruction Type Summary ===")?;
        writeln!(f, "Instruction Type\tCount")?;
        writeln!(f, "----------------\t-----")?;
        let mut total = 0;
        for (label, count) in self.acc.type_counts_by_frequency() {
            writeln!(f, "{label}\t{count}")?;
            total += count;
        }
        writeln!(f, "Total\t{total}")
    }

    fn write_csr_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name_header, name_rule) = if self.options.show_csr_names {
            ("\tCSR Name", "\t--------")
        } else {
            ("", "")
        };
        writeln!(f, "\n=== CSR Address Summary ===")?;
        writeln!(
            f,
            "CSR Address\tPrivilege Level\tUse and Accessibility\tCount{name_header}"
        )?;
        writeln!(
            f,
            "----------\t--------------\t-------------------\t-----{name_rule}"
        )?;

        let mut total_accesses = 0;
        let mut total_unique = 0;
        for group in self.csr_groups().values() {
            let privilege = group.class.privilege.label();
            let accessibility = group.class.accessibility.label();
            let mut subtotal = 0;
            for &(csr, count) in &group.addresses {
                writeln!(
                    f,
                    "0x{csr:03X}\t{privilege}\t{accessibility}\t{count}{}",
                    self.name_column(Some(csr))
                )?;
                subtotal += count;
            }
            let unique = group.addresses.len();
            writeln!(
                f,
                "Subtotal for {privilege}, {accessibility}: {subtotal} accesses across {unique} unique registers"
            )?;
            writeln!(f)?;
            total_accesses += subtotal;
            total_unique += unique;
        }
        writeln!(
            f,
            "Total CSR accesses: {total_accesses} across {total_unique} unique registers"
        )
    }

    /// Groups counted addresses by classification, keyed by the combined label.
    ///
    /// Addresses come out of the accumulator ascending, so each group stays sorted.
    fn csr_groups(&self) -> BTreeMap<String, CsrGroup> {
        let mut groups: BTreeMap<String, CsrGroup> = BTreeMap::new();
        for (&csr, &count) in self.acc.csr_counts() {
            let class = self.space.classify(csr);
            groups
                .entry(class.group_label())
                .or_insert_with(|| CsrGroup {
                    class,
                    addresses: Vec::new(),
                })
                .addresses
                .push((csr, count));
        }
        groups
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_TITLE}")?;
        self.write_known(f)?;
        self.write_unknown(f)?;
        self.write_warnings(f)?;
        self.write_type_summary(f)?;
        self.write_csr_summary(f)
    }
}

/// Addresses sharing one classification.
struct CsrGroup {
    class: CsrClass,
    addresses: Vec<(u16, u64)>,
}

/// The `offset<TAB>raw<TAB>decoded` prefix shared by both trace tables.
struct TraceRow<'e>(&'e TraceEntry);

impl fmt::Display for TraceRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:08X}\t0x{:08X}\t{}",
            self.0.offset, self.0.raw, self.0.instruction
        )
    }
}

/// Renders the full report for a finished scan.
///
/// # Arguments
///
/// * `acc` - The accumulator of a completed scan.
/// * `space` - The CSR table used to group the address summary.
/// * `options` - Optional columns.
pub fn render(acc: &ScanAccumulator, space: &CsrSpace, options: ReportOptions) -> String {
    Report::new(acc, space, options).to_string()
}
