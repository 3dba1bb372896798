use super::Decompressor;
use crate::error::Result;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// In-process gunzip.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlateGunzip;

impl Decompressor for FlateGunzip {
    fn name(&self) -> &str {
        "flate2"
    }

    fn decompress(&self, src: &Path, dst: &mut File) -> Result<u64> {
        let mut dec = MultiGzDecoder::new(BufReader::new(File::open(src)?));
        Ok(std::io::copy(&mut dec, dst)?)
    }
}
