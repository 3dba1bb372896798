use crate::error::{Result, TpfError};
use crate::util::cursor::Cursor;
use std::io::Read;

pub const FORMAT_VERSION: u8 = 1;
/// Version byte + section count.
pub const HEADER_LEN: u64 = 2;
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Compression {
    None,
    Gzip,
}

impl Compression {
    /// Classify a stream by its first bytes. Anything shorter than the magic
    /// is treated as uncompressed.
    pub fn sniff(prefix: &[u8]) -> Self {
        if prefix.starts_with(&GZIP_MAGIC) {
            Compression::Gzip
        } else {
            Compression::None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Header {
    pub version: u8,
    pub section_count: u8,
}

impl Header {
    /// Reads the version byte first and rejects anything but version 1 before
    /// touching the rest of the stream.
    pub fn read_from<R: Read>(cur: &mut Cursor<R>) -> Result<Self> {
        let version = cur.read_u8()?;
        if version != FORMAT_VERSION {
            return Err(TpfError::UnsupportedVersion(version));
        }
        let section_count = cur.read_u8()?;
        Ok(Self {
            version,
            section_count,
        })
    }
}
