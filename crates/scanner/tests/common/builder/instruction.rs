use csrscan_core::isa::privileged::opcodes::*;

/// Fluent encoder for I-type words, defaulting to the SYSTEM opcode.
#[derive(Debug, Clone, Copy)]
pub struct InstructionBuilder {
    opcode: u32,
    rd: u32,
    funct3: u32,
    rs1: u32,
    imm12: u32,
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            opcode: OP_SYSTEM,
            rd: 0,
            funct3: 0,
            rs1: 0,
            imm12: 0,
        }
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn rs1(mut self, rs1: u32) -> Self {
        self.rs1 = rs1;
        self
    }

    pub fn funct3(mut self, funct3: u32) -> Self {
        self.funct3 = funct3;
        self
    }

    pub fn imm12(mut self, imm12: u32) -> Self {
        self.imm12 = imm12;
        self
    }

    // --- Helpers for Common Instructions ---

    pub fn csrrw(self, rd: u32, csr: u32, rs1: u32) -> Self {
        self.csr_op(CSRRW, rd, csr, rs1)
    }

    pub fn csrrs(self, rd: u32, csr: u32, rs1: u32) -> Self {
        self.csr_op(CSRRS, rd, csr, rs1)
    }

    pub fn csrrc(self, rd: u32, csr: u32, rs1: u32) -> Self {
        self.csr_op(CSRRC, rd, csr, rs1)
    }

    pub fn csrrwi(self, rd: u32, csr: u32, uimm: u32) -> Self {
        self.csr_op(CSRRWI, rd, csr, uimm)
    }

    pub fn csrrsi(self, rd: u32, csr: u32, uimm: u32) -> Self {
        self.csr_op(CSRRSI, rd, csr, uimm)
    }

    pub fn csrrci(self, rd: u32, csr: u32, uimm: u32) -> Self {
        self.csr_op(CSRRCI, rd, csr, uimm)
    }

    /// `csrr rd, csr` (CSRRS with `rs1 = x0`).
    pub fn csrr(self, rd: u32, csr: u32) -> Self {
        self.csrrs(rd, csr, 0)
    }

    fn csr_op(mut self, funct3: u8, rd: u32, csr: u32, rs1: u32) -> Self {
        self.opcode = OP_SYSTEM;
        self.funct3 = funct3 as u32;
        self.rd = rd;
        self.imm12 = csr;
        self.rs1 = rs1;
        self
    }

    pub fn build(self) -> u32 {
        (self.imm12 & 0xFFF) << 20
            | (self.rs1 & 0x1F) << 15
            | (self.funct3 & 0x7) << 12
            | (self.rd & 0x1F) << 7
            | (self.opcode & 0x7F)
    }
}

/// `addi x0, x0, 0`, the canonical NOP (not a SYSTEM word).
pub const NOP: u32 = 0x0000_0013;
