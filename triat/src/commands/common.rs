//! Shared helpers for triat commands.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Ensures `dir` exists, creating it (and parents) if necessary.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Writes `contents` to `dir/name`, creating `dir` first if needed.
pub fn write_artifact(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    ensure_output_dir(dir)?;
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}
