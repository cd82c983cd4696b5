//! Control and Status Register (CSR) address space.
//!
//! * `space`: Privilege/accessibility classification of every 12-bit address.
//! * `names`: Architectural names of the well-known registers.

/// Well-known CSR addresses and names.
pub mod names;

/// Classification table over the CSR address space.
pub mod space;

pub use names::csr_name;
pub use space::{Accessibility, CSR_RULES, CsrClass, CsrRule, CsrSpace, PrivilegeLevel};
