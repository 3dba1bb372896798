use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TpfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before `wanted` more bytes could be read.
    #[error("truncated input: wanted {wanted} more bytes at offset {offset}")]
    TruncatedInput { offset: u64, wanted: u64 },

    #[error("invalid UTF-8 in string at offset {offset}: {source}")]
    Encoding {
        offset: u64,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Format error: {0}")]
    Format(String),

    #[error("Unsupported version: {0}.")]
    UnsupportedVersion(u8),

    #[error("No transport form found in {}.", .0.display())]
    NoInputFound(PathBuf),

    #[error("external tool `{tool}` failed: {detail}")]
    ExternalTool { tool: String, detail: String },
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, TpfError>;
