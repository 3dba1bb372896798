use super::ArchiveExtractor;
use crate::error::{Result, TpfError};
use std::path::Path;
use std::process::Command;

/// Runs `tar -xf <archive> -C <dest>`.
#[derive(Debug, Clone)]
pub struct TarCommand {
    pub program: String,
}

impl TarCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for TarCommand {
    fn default() -> Self {
        Self::new("tar")
    }
}

impl ArchiveExtractor for TarCommand {
    fn name(&self) -> &str {
        &self.program
    }

    fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .arg("-xf")
            .arg(archive)
            .arg("-C")
            .arg(dest)
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
        Ok(())
    }
}
