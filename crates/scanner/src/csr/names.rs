//! Well-known Control and Status Register names.
//!
//! This module maps standard CSR addresses to their architectural names. It covers:
//! 1. **Unprivileged:** Floating-point control and the user counters.
//! 2. **Supervisor:** Trap setup, trap handling and address translation.
//! 3. **Machine:** Information, trap setup, trap handling, PMP and counters.
//! 4. **Debug:** Trigger and debug-mode registers.
//!
//! Names only decorate the report; classification never depends on them.

/// Floating-point accrued exceptions CSR address.
pub const FFLAGS: u16 = 0x001;
/// Floating-point dynamic rounding mode CSR address.
pub const FRM: u16 = 0x002;
/// Floating-point control and status CSR address.
pub const FCSR: u16 = 0x003;

/// Cycle counter CSR address.
pub const CYCLE: u16 = 0xC00;
/// Timer CSR address.
pub const TIME: u16 = 0xC01;
/// Instructions-retired counter CSR address.
pub const INSTRET: u16 = 0xC02;

/// Supervisor status register CSR address.
pub const SSTATUS: u16 = 0x100;
/// Supervisor interrupt enable register CSR address.
pub const SIE: u16 = 0x104;
/// Supervisor trap vector base address register CSR address.
pub const STVEC: u16 = 0x105;
/// Supervisor counter enable register CSR address.
pub const SCOUNTEREN: u16 = 0x106;
/// Supervisor scratch register CSR address.
pub const SSCRATCH: u16 = 0x140;
/// Supervisor exception program counter CSR address.
pub const SEPC: u16 = 0x141;
/// Supervisor cause register CSR address.
pub const SCAUSE: u16 = 0x142;
/// Supervisor trap value register CSR address.
pub const STVAL: u16 = 0x143;
/// Supervisor interrupt pending register CSR address.
pub const SIP: u16 = 0x144;
/// Supervisor timer compare register CSR address (Sstc).
pub const STIMECMP: u16 = 0x14D;
/// Supervisor address translation and protection register CSR address.
pub const SATP: u16 = 0x180;

/// Machine status register CSR address.
pub const MSTATUS: u16 = 0x300;
/// Machine ISA register CSR address.
pub const MISA: u16 = 0x301;
/// Machine exception delegation register CSR address.
pub const MEDELEG: u16 = 0x302;
/// Machine interrupt delegation register CSR address.
pub const MIDELEG: u16 = 0x303;
/// Machine interrupt enable register CSR address.
pub const MIE: u16 = 0x304;
/// Machine trap vector base address register CSR address.
pub const MTVEC: u16 = 0x305;
/// Machine counter enable register CSR address.
pub const MCOUNTEREN: u16 = 0x306;
/// Machine scratch register CSR address.
pub const MSCRATCH: u16 = 0x340;
/// Machine exception program counter CSR address.
pub const MEPC: u16 = 0x341;
/// Machine cause register CSR address.
pub const MCAUSE: u16 = 0x342;
/// Machine trap value register CSR address.
pub const MTVAL: u16 = 0x343;
/// Machine interrupt pending register CSR address.
pub const MIP: u16 = 0x344;
/// First PMP configuration register CSR address.
pub const PMPCFG0: u16 = 0x3A0;
/// Last PMP configuration register CSR address.
pub const PMPCFG15: u16 = 0x3AF;
/// First PMP address register CSR address.
pub const PMPADDR0: u16 = 0x3B0;
/// Last PMP address register CSR address.
pub const PMPADDR63: u16 = 0x3EF;

/// Debug/trace trigger select CSR address.
pub const TSELECT: u16 = 0x7A0;
/// First debug/trace trigger data CSR address.
pub const TDATA1: u16 = 0x7A1;
/// Second debug/trace trigger data CSR address.
pub const TDATA2: u16 = 0x7A2;
/// Third debug/trace trigger data CSR address.
pub const TDATA3: u16 = 0x7A3;
/// Debug control and status CSR address.
pub const DCSR: u16 = 0x7B0;
/// Debug program counter CSR address.
pub const DPC: u16 = 0x7B1;
/// First debug scratch CSR address.
pub const DSCRATCH0: u16 = 0x7B2;
/// Second debug scratch CSR address.
pub const DSCRATCH1: u16 = 0x7B3;

/// Machine cycle counter CSR address.
pub const MCYCLE: u16 = 0xB00;
/// Machine instructions-retired counter CSR address.
pub const MINSTRET: u16 = 0xB02;

/// Machine vendor ID CSR address.
pub const MVENDORID: u16 = 0xF11;
/// Machine architecture ID CSR address.
pub const MARCHID: u16 = 0xF12;
/// Machine implementation ID CSR address.
pub const MIMPID: u16 = 0xF13;
/// Machine hardware thread ID CSR address.
pub const MHARTID: u16 = 0xF14;

/// Names of the numbered PMP configuration registers.
const PMPCFG_NAMES: [&str; 16] = [
    "pmpcfg0", "pmpcfg1", "pmpcfg2", "pmpcfg3", "pmpcfg4", "pmpcfg5", "pmpcfg6", "pmpcfg7",
    "pmpcfg8", "pmpcfg9", "pmpcfg10", "pmpcfg11", "pmpcfg12", "pmpcfg13", "pmpcfg14",
    "pmpcfg15",
];

/// Names of the numbered PMP address registers.
const PMPADDR_NAMES: [&str; 64] = [
    "pmpaddr0", "pmpaddr1", "pmpaddr2", "pmpaddr3", "pmpaddr4", "pmpaddr5", "pmpaddr6",
    "pmpaddr7", "pmpaddr8", "pmpaddr9", "pmpaddr10", "pmpaddr11", "pmpaddr12", "pmpaddr13",
    "pmpaddr14", "pmpaddr15", "pmpaddr16", "pmpaddr17", "pmpaddr18", "pmpaddr19", "pmpaddr20",
    "pmpaddr21", "pmpaddr22", "pmpaddr23", "pmpaddr24", "pmpaddr25", "pmpaddr26", "pmpaddr27",
    "pmpaddr28", "pmpaddr29", "pmpaddr30", "pmpaddr31", "pmpaddr32", "pmpaddr33", "pmpaddr34",
    "pmpaddr35", "pmpaddr36", "pmpaddr37", "pmpaddr38", "pmpaddr39", "pmpaddr40", "pmpaddr41",
    "pmpaddr42", "pmpaddr43", "pmpaddr44", "pmpaddr45", "pmpaddr46", "pmpaddr47", "pmpaddr48",
    "pmpaddr49", "pmpaddr50", "pmpaddr51", "pmpaddr52", "pmpaddr53", "pmpaddr54", "pmpaddr55",
    "pmpaddr56", "pmpaddr57", "pmpaddr58", "pmpaddr59", "pmpaddr60", "pmpaddr61", "pmpaddr62",
    "pmpaddr63",
];

/// Returns the architectural name of a CSR, if it is a well-known one.
///
/// # Arguments
///
/// * `csr` - The 12-bit CSR address.
pub fn csr_name(csr: u16) -> Option<&'static str> {
    let name = match csr {
        FFLAGS => "fflags",
        FRM => "frm",
        FCSR => "fcsr",
        CYCLE => "cycle",
        TIME => "time",
        INSTRET => "instret",
        SSTATUS => "sstatus",
        SIE => "sie",
        STVEC => "stvec",
        SCOUNTEREN => "scounteren",
        SSCRATCH => "sscratch",
        SEPC => "sepc",
        SCAUSE => "scause",
        STVAL => "stval",
        SIP => "sip",
        STIMECMP => "stimecmp",
        SATP => "satp",
        MSTATUS => "mstatus",
        MISA => "misa",
        MEDELEG => "medeleg",
        MIDELEG => "mideleg",
        MIE => "mie",
        MTVEC => "mtvec",
        MCOUNTEREN => "mcounteren",
        MSCRATCH => "mscratch",
        MEPC => "mepc",
        MCAUSE => "mcause",
        MTVAL => "mtval",
        MIP => "mip",
        PMPCFG0..=PMPCFG15 => PMPCFG_NAMES[usize::from(csr - PMPCFG0)],
        PMPADDR0..=PMPADDR63 => PMPADDR_NAMES[usize::from(csr - PMPADDR0)],
        TSELECT => "tselect",
        TDATA1 => "tdata1",
        TDATA2 => "tdata2",
        TDATA3 => "tdata3",
        DCSR => "dcsr",
        DPC => "dpc",
        DSCRATCH0 => "dscratch0",
        DSCRATCH1 => "dscratch1",
        MCYCLE => "mcycle",
        MINSTRET => "minstret",
        MVENDORID => "mvendorid",
        MARCHID => "marchid",
        MIMPID => "mimpid",
        MHARTID => "mhartid",
        _ => return None,
    };
    Some(name)
}
