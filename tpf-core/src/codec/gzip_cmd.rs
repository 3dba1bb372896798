use super::Decompressor;
use crate::error::{Result, TpfError};
use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

const PIGZ: &str = "/usr/bin/pigz";

/// Pipes the input through an external `gzip -d` compatible program.
#[derive(Debug, Clone)]
pub struct GzipCommand {
    pub program: String,
}

impl GzipCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `pigz` when installed, plain `gzip` otherwise.
    pub fn detect() -> Self {
        if Path::new(PIGZ).exists() {
            Self::new("pigz")
        } else {
            Self::new("gzip")
        }
    }
}

impl Default for GzipCommand {
    fn default() -> Self {
        Self::detect()
    }
}

impl Decompressor for GzipCommand {
    fn name(&self) -> &str {
        &self.program
    }

    fn decompress(&self, src: &Path, dst: &mut File) -> Result<u64> {
        let stdin = File::open(src)?;
        let stdout = dst.try_clone()?;
        tracing::debug!(program = %self.program, src = %src.display(), "running decompressor");
        let status = Command::new(&self.program)
            .arg("-d")
            .stdin(Stdio::from(stdin))
            .stdout(Stdio::from(stdout))
            .status()
            .map_err(|e| TpfError::ExternalTool {
                tool: self.program.clone(),
                detail: e.to_string(),
            })?;
        if !status.success() {
            return Err(TpfError::ExternalTool {
                tool: self.program.clone(),
                detail: format!("exited with {status}"),
            });
        }
        Ok(dst.metadata()?.len())
    }
}
