//! CSR address-space classification.
//!
//! This module classifies the 12-bit CSR address space by privilege level and
//! accessibility, following the address-encoding convention of the RISC-V
//! privileged specification:
//! 1. **Privilege:** Bits `[9:8]` give the lowest privilege level allowed to access the CSR.
//! 2. **Accessibility:** Bits `[11:10]` mark read-only (`0b11`) versus read/write space, and the
//!    upper nibble pattern within each quadrant separates standard, custom and debug blocks.
//! 3. **Lookup Table:** [`CsrSpace`] evaluates an ordered rule list once into a flat
//!    4096-entry table; lookups afterwards are a single index.
//!
//! Addresses no rule covers classify as `(Unknown, Unknown)` rather than failing.

use std::fmt;
use std::sync::LazyLock;

use crate::common::constants::{CSR_ADDRESS_MAX, CSR_SPACE_SIZE};

use Accessibility::{
    CustomReadOnly, CustomReadWrite, DebugModeOnly, DebugReadWrite, StandardReadOnly,
    StandardReadWrite,
};
use PrivilegeLevel::{Hypervisor, Machine, Supervisor, User};

/// Lowest privilege level allowed to access a CSR.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrivilegeLevel {
    /// Unprivileged and user-level CSRs (`[9:8] = 0b00`).
    User,
    /// Supervisor-level CSRs (`[9:8] = 0b01`).
    Supervisor,
    /// Hypervisor and virtual-supervisor CSRs (`[9:8] = 0b10`).
    Hypervisor,
    /// Machine-level CSRs (`[9:8] = 0b11`).
    Machine,
    /// Not covered by any rule.
    Unknown,
}

impl PrivilegeLevel {
    /// Report label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "Unprivileged and User-Level",
            Self::Supervisor => "Supervisor-Level",
            Self::Hypervisor => "Hypervisor and VS",
            Self::Machine => "Machine-Level",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PrivilegeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Use and accessibility class of a CSR block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Accessibility {
    /// Standard read/write.
    StandardReadWrite,
    /// Standard read-only.
    StandardReadOnly,
    /// Custom (vendor) read/write.
    CustomReadWrite,
    /// Custom (vendor) read-only.
    CustomReadOnly,
    /// Standard read/write debug/trace CSRs (`0x7A0-0x7AF`).
    DebugReadWrite,
    /// Debug-mode-only CSRs (`0x7B0-0x7BF`).
    DebugModeOnly,
    /// Not covered by any rule.
    Unknown,
}

impl Accessibility {
    /// Report label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::StandardReadWrite => "Standard read/write",
            Self::StandardReadOnly => "Standard read-only",
            Self::CustomReadWrite => "Custom read/write",
            Self::CustomReadOnly => "Custom read-only",
            Self::DebugReadWrite => "Standard read/write/debug CSRs",
            Self::DebugModeOnly => "Debug-mode-only CSRs",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of one CSR address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CsrClass {
    /// Lowest privilege level with access.
    pub privilege: PrivilegeLevel,
    /// Use and accessibility.
    pub accessibility: Accessibility,
}

impl CsrClass {
    /// Classification of addresses outside every rule.
    pub const UNKNOWN: Self = Self::new(PrivilegeLevel::Unknown, Accessibility::Unknown);

    /// Creates a classification.
    pub const fn new(privilege: PrivilegeLevel, accessibility: Accessibility) -> Self {
        Self {
            privilege,
            accessibility,
        }
    }

    /// Combined `privilege<TAB>accessibility` label; CSR summary groups sort by it.
    pub fn group_label(&self) -> String {
        format!("{}\t{}", self.privilege.label(), self.accessibility.label())
    }
}

/// An inclusive address range and the classification written into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CsrRule {
    /// First address of the range.
    pub start: u16,
    /// Last address of the range (inclusive).
    pub end: u16,
    /// Classification applied to every address in `start..=end`.
    pub class: CsrClass,
}

impl CsrRule {
    const fn new(start: u16, end: u16, privilege: PrivilegeLevel, access: Accessibility) -> Self {
        Self {
            start,
            end,
            class: CsrClass::new(privilege, access),
        }
    }
}

/// Canonical classification rules, applied in order.
///
/// The ranges are disjoint and together cover the whole 12-bit space.
pub const CSR_RULES: &[CsrRule] = &[
    // Unprivileged and user-level ([9:8] = 00)
    CsrRule::new(0x000, 0x0FF, User, StandardReadWrite),
    CsrRule::new(0x400, 0x4FF, User, StandardReadWrite),
    CsrRule::new(0x800, 0x8FF, User, CustomReadWrite),
    CsrRule::new(0xC00, 0xC7F, User, StandardReadOnly),
    CsrRule::new(0xC80, 0xCBF, User, StandardReadOnly),
    CsrRule::new(0xCC0, 0xCFF, User, CustomReadOnly),
    // Supervisor-level ([9:8] = 01)
    CsrRule::new(0x100, 0x1FF, Supervisor, StandardReadWrite),
    CsrRule::new(0x500, 0x57F, Supervisor, StandardReadWrite),
    CsrRule::new(0x580, 0x5BF, Supervisor, StandardReadWrite),
    CsrRule::new(0x5C0, 0x5FF, Supervisor, CustomReadWrite),
    CsrRule::new(0x900, 0x97F, Supervisor, StandardReadWrite),
    CsrRule::new(0x980, 0x9BF, Supervisor, StandardReadWrite),
    CsrRule::new(0x9C0, 0x9FF, Supervisor, CustomReadWrite),
    CsrRule::new(0xD00, 0xD7F, Supervisor, StandardReadOnly),
    CsrRule::new(0xD80, 0xDBF, Supervisor, StandardReadOnly),
    CsrRule::new(0xDC0, 0xDFF, Supervisor, CustomReadOnly),
    // Hypervisor and VS ([9:8] = 10)
    CsrRule::new(0x200, 0x2FF, Hypervisor, StandardReadWrite),
    CsrRule::new(0x600, 0x67F, Hypervisor, StandardReadWrite),
    CsrRule::new(0x680, 0x6BF, Hypervisor, StandardReadWrite),
    CsrRule::new(0x6C0, 0x6FF, Hypervisor, CustomReadWrite),
    CsrRule::new(0xA00, 0xA7F, Hypervisor, StandardReadWrite),
    CsrRule::new(0xA80, 0xABF, Hypervisor, StandardReadWrite),
    CsrRule::new(0xAC0, 0xAFF, Hypervisor, CustomReadWrite),
    CsrRule::new(0xE00, 0xE7F, Hypervisor, StandardReadOnly),
    CsrRule::new(0xE80, 0xEBF, Hypervisor, StandardReadWrite),
    CsrRule::new(0xEC0, 0xEFF, Hypervisor, CustomReadWrite),
    // Machine-level ([9:8] = 11)
    CsrRule::new(0x300, 0x3FF, Machine, StandardReadWrite),
    CsrRule::new(0x700, 0x77F, Machine, StandardReadWrite),
    CsrRule::new(0x780, 0x79F, Machine, StandardReadWrite),
    CsrRule::new(0x7A0, 0x7AF, Machine, DebugReadWrite),
    CsrRule::new(0x7B0, 0x7BF, Machine, DebugModeOnly),
    CsrRule::new(0x7C0, 0x7FF, Machine, CustomReadWrite),
    CsrRule::new(0xB00, 0xB7F, Machine, StandardReadWrite),
    CsrRule::new(0xB80, 0xBBF, Machine, StandardReadWrite),
    CsrRule::new(0xBC0, 0xBFF, Machine, CustomReadWrite),
    CsrRule::new(0xF00, 0xF7F, Machine, StandardReadOnly),
    CsrRule::new(0xF80, 0xFBF, Machine, StandardReadWrite),
    CsrRule::new(0xFC0, 0xFFF, Machine, CustomReadWrite),
];

static STANDARD: LazyLock<CsrSpace> = LazyLock::new(|| CsrSpace::from_rules(CSR_RULES));

/// Lookup table over the full CSR address space.
///
/// Immutable once built, so a single table can be shared by any number of
/// concurrent scans without locking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsrSpace {
    table: Box<[CsrClass]>,
}

impl CsrSpace {
    /// Builds a table by writing each rule's class over its range, in order.
    ///
    /// Later rules overwrite earlier ones where they overlap; addresses above
    /// `0xFFF` in a rule are ignored.
    pub fn from_rules(rules: &[CsrRule]) -> Self {
        let mut table = vec![CsrClass::UNKNOWN; CSR_SPACE_SIZE].into_boxed_slice();
        for rule in rules {
            let start = usize::from(rule.start);
            let end = usize::from(rule.end.min(CSR_ADDRESS_MAX));
            if start > end {
                continue;
            }
            table[start..=end].fill(rule.class);
        }
        Self { table }
    }

    /// Shared table built from [`CSR_RULES`].
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Classifies a CSR address.
    ///
    /// Total: every input yields a class, `(Unknown, Unknown)` outside the
    /// rules and outside the 12-bit space.
    #[inline]
    pub fn classify(&self, csr: u16) -> CsrClass {
        self.table
            .get(usize::from(csr))
            .copied()
            .unwrap_or(CsrClass::UNKNOWN)
    }
}

impl Default for CsrSpace {
    fn default() -> Self {
        Self::standard().clone()
    }
}
