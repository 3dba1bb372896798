use crate::error::{Result, TpfError};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

pub const EXTENSION: &str = ".tpm2";

/// Use `explicit` when given, otherwise the lexicographically first regular
/// `*.tpm2` file in `dir`. Symlinks count when they resolve to a file.
pub fn locate_input(explicit: Option<&Path>, dir: &Path) -> Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }

    let mut names: Vec<OsString> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if !name.as_encoded_bytes().ends_with(EXTENSION.as_bytes()) {
            continue;
        }
        let ty = entry.file_type()?;
        let is_file = ty.is_file() || (ty.is_symlink() && entry.path().is_file());
        if !is_file {
            tracing::debug!(path = %entry.path().display(), "skipping non-file candidate");
            continue;
        }
        names.push(name);
    }
    names.sort();

    names
        .into_iter()
        .next()
        .map(|name| dir.join(name))
        .ok_or_else(|| TpfError::NoInputFound(dir.to_path_buf()))
}
