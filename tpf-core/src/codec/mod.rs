use crate::error::Result;
use std::fs::File;
use std::path::Path;

/// Turns a compressed transport form into its raw byte stream.
pub trait Decompressor: Send + Sync {
    fn name(&self) -> &str;
    /// Decompress the whole of `src` into `dst`, returning the number of
    /// bytes written.
    fn decompress(&self, src: &Path, dst: &mut File) -> Result<u64>;
}

pub mod flate;
pub mod gzip_cmd;

pub use flate::FlateGunzip;
pub use gzip_cmd::GzipCommand;
