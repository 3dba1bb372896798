#![allow(dead_code)]

use flate2::Compression as Level;
use flate2::write::GzEncoder;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tpf_core::error::{Result, TpfError};
use tpf_core::{ArchiveExtractor, FlateGunzip, Mode, UnpackOptions};

/// Assembles transport form bytes for tests.
pub struct FormBuilder {
    version: u8,
    sections: Vec<(u8, u32, Vec<u8>)>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self {
            version: 1,
            sections: Vec::new(),
        }
    }

    pub fn version(mut self, v: u8) -> Self {
        self.version = v;
        self
    }

    pub fn section(self, code: u8, payload: impl Into<Vec<u8>>) -> Self {
        let payload = payload.into();
        let size = payload.len() as u32;
        self.section_declaring(code, size, payload)
    }

    /// Section whose TOC size differs from the bytes actually written.
    pub fn section_declaring(mut self, code: u8, size: u32, payload: impl Into<Vec<u8>>) -> Self {
        self.sections.push((code, size, payload.into()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = vec![self.version, self.sections.len() as u8];
        let mut start = 2 + 9 * self.sections.len() as u32;
        for (code, size, _) in &self.sections {
            out.push(*code);
            out.extend_from_slice(&start.to_le_bytes());
            out.extend_from_slice(&size.to_le_bytes());
            start = start.wrapping_add(*size);
        }
        for (_, _, payload) in &self.sections {
            out.extend_from_slice(payload);
        }
        out
    }
}

pub fn index_entry(type_code: u8, uid: u32, gid: u32, mode: u16, size: u32, sha1: [u8; 20], path: &str) -> Vec<u8> {
    let mut v = vec![type_code];
    v.extend_from_slice(&uid.to_le_bytes());
    v.extend_from_slice(&gid.to_le_bytes());
    v.extend_from_slice(&mode.to_le_bytes());
    v.extend_from_slice(&size.to_le_bytes());
    v.extend_from_slice(&sha1);
    v.extend_from_slice(path.as_bytes());
    v.push(0);
    v
}

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Level::default());
    enc.write_all(bytes).unwrap();
    enc.finish().unwrap()
}

pub fn write_input(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let p = dir.join(name);
    std::fs::write(&p, bytes).unwrap();
    p
}

/// Records each archive it is asked to unpack instead of running tar.
#[derive(Clone, Default)]
pub struct RecordingExtractor {
    pub calls: Arc<Mutex<Vec<(Vec<u8>, PathBuf)>>>,
}

impl ArchiveExtractor for RecordingExtractor {
    fn name(&self) -> &str {
        "recording"
    }

    fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        let bytes = std::fs::read(archive)?;
        self.calls.lock().unwrap().push((bytes, dest.to_path_buf()));
        Ok(())
    }
}

pub struct FailingExtractor;

impl ArchiveExtractor for FailingExtractor {
    fn name(&self) -> &str {
        "broken-tar"
    }

    fn extract(&self, _archive: &Path, _dest: &Path) -> Result<()> {
        Err(TpfError::ExternalTool {
            tool: "broken-tar".into(),
            detail: "exited with exit status: 2".into(),
        })
    }
}

pub fn options(mode: Mode, out_dir: &Path, extractor: impl ArchiveExtractor + 'static) -> UnpackOptions {
    UnpackOptions {
        mode,
        out_dir: out_dir.to_path_buf(),
        decompressor: Box::new(FlateGunzip),
        extractor: Box::new(extractor),
    }
}
