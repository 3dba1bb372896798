use crate::error::{Result, TpfError};
use crate::util::cursor::Cursor;
use std::fmt;
use std::io::Read;

/// type + uid + gid + mode + size + sha1, before the NUL-terminated path.
pub const ENTRY_FIXED_LEN: u64 = 1 + 4 + 4 + 2 + 4 + 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Regular,
    Directory,
    Link,
    Block,
    Char,
    Socket,
    Pipe,
    Unknown(u8),
}

impl EntryType {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => EntryType::Regular,
            1 => EntryType::Directory,
            2 => EntryType::Link,
            3 => EntryType::Block,
            4 => EntryType::Char,
            5 => EntryType::Socket,
            6 => EntryType::Pipe,
            other => EntryType::Unknown(other),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EntryType::Regular => "regular",
            EntryType::Directory => "directory",
            EntryType::Link => "link",
            EntryType::Block => "block",
            EntryType::Char => "char",
            EntryType::Socket => "socket",
            EntryType::Pipe => "pipe",
            EntryType::Unknown(_) => "?",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub entry_type: EntryType,
    pub uid: u32,
    pub gid: u32,
    pub mode: u16,
    pub size: u32,
    pub sha1: [u8; 20],
    pub path: String,
}

impl IndexEntry {
    /// Decode one record without consuming more than `budget` bytes.
    pub fn read_within<R: Read>(cur: &mut Cursor<R>, budget: u64) -> Result<Self> {
        if budget < ENTRY_FIXED_LEN {
            return Err(TpfError::Format(format!(
                "index entry at offset {} needs at least {ENTRY_FIXED_LEN} bytes, \
                 section has {budget} left",
                cur.position()
            )));
        }
        let entry_type = EntryType::from_code(cur.read_u8()?);
        let uid = cur.read_u32()?;
        let gid = cur.read_u32()?;
        let mode = cur.read_u16()?;
        let size = cur.read_u32()?;
        let mut sha1 = [0u8; 20];
        sha1.copy_from_slice(&cur.read_bytes(20)?);
        let path = cur.read_cstring_within(budget - ENTRY_FIXED_LEN)?;
        Ok(Self {
            entry_type,
            uid,
            gid,
            mode,
            size,
            sha1,
            path,
        })
    }
}

/// One colon-separated line of the extracted `index` file, without the
/// trailing newline.
impl fmt::Display for IndexEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10}:{:05}:{:05}:{:04o}:{:010}:{}:{}",
            self.entry_type.name(),
            self.uid,
            self.gid,
            self.mode,
            self.size,
            hex::encode(self.sha1),
            self.path
        )
    }
}

/// Walk the records of an index section of `size` bytes, handing each to
/// `visit`. Consumes exactly `size` bytes or fails.
pub fn for_each_entry<R, F>(cur: &mut Cursor<R>, size: u64, mut visit: F) -> Result<u64>
where
    R: Read,
    F: FnMut(&IndexEntry) -> Result<()>,
{
    let end = cur.position() + size;
    let mut count = 0u64;
    while cur.position() < end {
        let entry = IndexEntry::read_within(cur, end - cur.position())?;
        visit(&entry)?;
        count += 1;
    }
    Ok(count)
}
