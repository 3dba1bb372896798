use crate::container::header::HEADER_LEN;
use crate::container::section::SectionKind;
use crate::error::Result;
use crate::util::cursor::Cursor;
use serde::Serialize;
use std::io::Read;

pub const ENTRY_SIZE: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionDescriptor {
    pub kind: SectionKind,
    /// Offset recorded by the writer. Kept for inspection only; payloads are
    /// located by consuming the preceding sections.
    pub start: u32,
    pub size: u32,
}

#[inline]
fn le32(x: &[u8]) -> u32 {
    u32::from_le_bytes([x[0], x[1], x[2], x[3]])
}

pub fn read_toc_from_slice(buf: &[u8]) -> Vec<SectionDescriptor> {
    // Layout: [0]=type (u8), [1..5]=start, [5..9]=size
    buf.chunks_exact(ENTRY_SIZE)
        .map(|e| SectionDescriptor {
            kind: SectionKind::from_code(e[0]),
            start: le32(&e[1..5]),
            size: le32(&e[5..9]),
        })
        .collect()
}

/// Read `count` TOC records as one block and split them in file order.
pub fn read_toc<R: Read>(cur: &mut Cursor<R>, count: u8) -> Result<Vec<SectionDescriptor>> {
    let block = cur.read_bytes(count as usize * ENTRY_SIZE)?;
    Ok(read_toc_from_slice(&block))
}

/// Offsets each section would have if laid out back to back after the TOC.
pub fn sequential_starts(sections: &[SectionDescriptor]) -> Vec<u64> {
    let mut pos = HEADER_LEN + (sections.len() * ENTRY_SIZE) as u64;
    sections
        .iter()
        .map(|s| {
            let start = pos;
            pos += s.size as u64;
            start
        })
        .collect()
}
