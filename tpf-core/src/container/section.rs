use serde::Serialize;
use std::fmt;

pub const SEC_DESC: u8 = 0x00;
pub const SEC_FILE_INDEX: u8 = 0x01;
pub const SEC_PREINST: u8 = 0x20;
pub const SEC_CONFIGURE: u8 = 0x21;
pub const SEC_UNCONFIGURE: u8 = 0x22;
pub const SEC_POSTRM: u8 = 0x23;
pub const SEC_ARCHIVE: u8 = 0x80;
pub const SEC_SIG_OPENPGP: u8 = 0xf0;

/// Package lifecycle hook carried as a script section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Lifecycle {
    Preinst,
    Configure,
    Unconfigure,
    Postrm,
}

impl Lifecycle {
    /// Name of the hook, also used as the extracted file name.
    pub fn name(self) -> &'static str {
        match self {
            Lifecycle::Preinst => "preinst",
            Lifecycle::Configure => "configure",
            Lifecycle::Unconfigure => "unconfigure",
            Lifecycle::Postrm => "postrm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionKind {
    Metadata,
    FileIndex,
    Script(Lifecycle),
    Archive,
    Signature,
    Unknown(u8),
}

impl SectionKind {
    pub fn from_code(code: u8) -> Self {
        match code {
            SEC_DESC => SectionKind::Metadata,
            SEC_FILE_INDEX => SectionKind::FileIndex,
            SEC_PREINST => SectionKind::Script(Lifecycle::Preinst),
            SEC_CONFIGURE => SectionKind::Script(Lifecycle::Configure),
            SEC_UNCONFIGURE => SectionKind::Script(Lifecycle::Unconfigure),
            SEC_POSTRM => SectionKind::Script(Lifecycle::Postrm),
            SEC_ARCHIVE => SectionKind::Archive,
            SEC_SIG_OPENPGP => SectionKind::Signature,
            other => SectionKind::Unknown(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            SectionKind::Metadata => SEC_DESC,
            SectionKind::FileIndex => SEC_FILE_INDEX,
            SectionKind::Script(Lifecycle::Preinst) => SEC_PREINST,
            SectionKind::Script(Lifecycle::Configure) => SEC_CONFIGURE,
            SectionKind::Script(Lifecycle::Unconfigure) => SEC_UNCONFIGURE,
            SectionKind::Script(Lifecycle::Postrm) => SEC_POSTRM,
            SectionKind::Archive => SEC_ARCHIVE,
            SectionKind::Signature => SEC_SIG_OPENPGP,
            SectionKind::Unknown(code) => code,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::Metadata => "desc",
            SectionKind::FileIndex => "index",
            SectionKind::Script(l) => l.name(),
            SectionKind::Archive => "archive",
            SectionKind::Signature => "signature",
            SectionKind::Unknown(_) => "unknown",
        };
        f.pad(name)
    }
}
