//! Byte-stream and image construction helpers.

use std::io::{self, Read};

use csrscan_core::config::WordOrder;

/// Serializes words into a byte stream in the given order.
pub fn words_to_bytes(words: &[u32], order: WordOrder) -> Vec<u8> {
    words
        .iter()
        .flat_map(|&w| match order {
            WordOrder::Big => w.to_be_bytes(),
            WordOrder::Little => w.to_le_bytes(),
        })
        .collect()
}

/// Big-endian byte stream, the scanner's default order.
pub fn be_bytes(words: &[u32]) -> Vec<u8> {
    words_to_bytes(words, WordOrder::Big)
}

/// A reader that yields `data` and then fails with `kind`.
#[derive(Debug)]
pub struct FailingReader {
    data: Vec<u8>,
    pos: usize,
    kind: io::ErrorKind,
}

impl FailingReader {
    pub fn new(data: Vec<u8>, kind: io::ErrorKind) -> Self {
        Self { data, pos: 0, kind }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() {
            return Err(io::Error::new(self.kind, "injected failure"));
        }
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// A reader that hands out at most one byte per call.
#[derive(Debug)]
pub struct TrickleReader<'a>(pub &'a [u8]);

impl Read for TrickleReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match (self.0.split_first(), buf.first_mut()) {
            (Some((&byte, rest)), Some(slot)) => {
                *slot = byte;
                self.0 = rest;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

const SHF_ALLOC: u32 = 0x2;
const SHF_EXECINSTR: u32 = 0x4;
const SHT_PROGBITS: u32 = 1;
const SHT_STRTAB: u32 = 3;
const EHDR_SIZE: usize = 52;
const SHDR_SIZE: usize = 40;
const SHSTRTAB: &[u8] = b"\0.text\0.shstrtab\0";

/// Builds a minimal little-endian ELF32 RISC-V executable with a single
/// `.text` section holding `text` at `addr`.
///
/// With `executable == false` the section loses `SHF_EXECINSTR` and the
/// image has no code to scan, only read-only data to list.
pub fn minimal_elf32(text: &[u8], addr: u32, executable: bool) -> Vec<u8> {
    let text_off = EHDR_SIZE;
    let strtab_off = text_off + text.len();
    let shoff = (strtab_off + SHSTRTAB.len()).next_multiple_of(8);

    let mut out = Vec::with_capacity(shoff + 3 * SHDR_SIZE);
    // e_ident
    out.extend_from_slice(&[0x7F, b'E', b'L', b'F', 1, 1, 1, 0]);
    out.extend_from_slice(&[0; 8]);
    push_u16(&mut out, 2); // ET_EXEC
    push_u16(&mut out, 243); // EM_RISCV
    push_u32(&mut out, 1);
    push_u32(&mut out, addr);
    push_u32(&mut out, 0); // e_phoff
    push_u32(&mut out, shoff as u32);
    push_u32(&mut out, 0); // e_flags
    push_u16(&mut out, EHDR_SIZE as u16);
    push_u16(&mut out, 32); // e_phentsize
    push_u16(&mut out, 0); // e_phnum
    push_u16(&mut out, SHDR_SIZE as u16);
    push_u16(&mut out, 3); // e_shnum
    push_u16(&mut out, 2); // e_shstrndx

    out.extend_from_slice(text);
    out.extend_from_slice(SHSTRTAB);
    out.resize(shoff, 0);

    let flags = if executable {
        SHF_ALLOC | SHF_EXECINSTR
    } else {
        SHF_ALLOC
    };
    push_shdr(&mut out, [0; 10]);
    push_shdr(
        &mut out,
        [1, SHT_PROGBITS, flags, addr, text_off as u32, text.len() as u32, 0, 0, 4, 0],
    );
    push_shdr(
        &mut out,
        [7, SHT_STRTAB, 0, 0, strtab_off as u32, SHSTRTAB.len() as u32, 0, 0, 1, 0],
    );
    out
}

fn push_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_le_bytes());
}

fn push_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

fn push_shdr(out: &mut Vec<u8>, fields: [u32; 10]) {
    for field in fields {
        push_u32(out, field);
    }
}
