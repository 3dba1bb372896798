//! Sequential little-endian reader over any byte stream.
//!
//! The transport form is consumed strictly front to back, so the cursor only
//! ever moves forward and keeps a running count of consumed bytes.

use crate::error::{Result, TpfError};
use std::io::{self, Read, Write};

pub struct Cursor<R> {
    inner: R,
    pos: u64,
}

impl<R: Read> Cursor<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    /// Bytes consumed since the cursor was created.
    pub fn position(&self) -> u64 {
        self.pos
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut got = 0usize;
        while got < buf.len() {
            match self.inner.read(&mut buf[got..]) {
                Ok(0) => {
                    return Err(TpfError::TruncatedInput {
                        offset: self.pos + got as u64,
                        wanted: (buf.len() - got) as u64,
                    });
                }
                Ok(n) => got += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        self.pos += got as u64;
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Read a NUL-terminated UTF-8 string. The terminator is consumed but not
    /// returned.
    pub fn read_cstring(&mut self) -> Result<String> {
        self.read_cstring_within(u64::MAX)
    }

    /// Like [`Cursor::read_cstring`], but never consumes more than `limit`
    /// bytes (terminator included). Running out of budget is a format error.
    pub fn read_cstring_within(&mut self, limit: u64) -> Result<String> {
        let start = self.pos;
        let mut bytes = Vec::new();
        loop {
            if self.pos - start >= limit {
                return Err(TpfError::Format(format!(
                    "string at offset {start} is not terminated within {limit} bytes"
                )));
            }
            match self.read_u8()? {
                0 => break,
                b => bytes.push(b),
            }
        }
        String::from_utf8(bytes).map_err(|source| TpfError::Encoding {
            offset: start,
            source,
        })
    }

    /// Advance by `n` bytes without keeping them.
    pub fn skip(&mut self, n: u64) -> Result<()> {
        let copied = io::copy(&mut (&mut self.inner).take(n), &mut io::sink())?;
        self.pos += copied;
        if copied < n {
            return Err(TpfError::TruncatedInput {
                offset: self.pos,
                wanted: n - copied,
            });
        }
        Ok(())
    }

    /// Stream exactly `n` bytes into `out`, holding at most `chunk` bytes in
    /// memory at a time.
    pub fn copy_to(&mut self, n: u64, out: &mut dyn Write, chunk: usize) -> Result<()> {
        let mut buf = vec![0u8; chunk.max(1).min(n as usize)];
        let mut remain = n;
        while remain > 0 {
            let want = buf.len().min(remain as usize);
            self.fill(&mut buf[..want])?;
            out.write_all(&buf[..want])?;
            remain -= want as u64;
        }
        Ok(())
    }
}
