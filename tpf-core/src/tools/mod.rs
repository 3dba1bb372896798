use crate::error::Result;
use std::path::Path;

/// Unpacks the filesystem archive carried in the archive section.
pub trait ArchiveExtractor: Send + Sync {
    fn name(&self) -> &str;
    fn extract(&self, archive: &Path, dest: &Path) -> Result<()>;
}

pub mod tar;

pub use tar::TarCommand;
