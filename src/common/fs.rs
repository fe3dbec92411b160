use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;

/// Refuse `-` as an output path; exports always go to a real file.
pub fn assert_not_stdout(path: &Path) -> Result<()> {
    if path == Path::new("-") {
        bail!("stdout is not supported; provide a real file path.");
    }
    Ok(())
}

/// Write-then-rename so readers never see a half-written file.
pub fn write_atomic(target: &Path, bytes: &[u8], force: bool) -> Result<()> {
    assert_not_stdout(target)?;
    if !force && target.exists() {
        bail!("Refusing to overwrite existing file: {} (use --force)", target.display());
    }
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let mut tmp = NamedTempFile::new_in(dir).context("create temp file")?;
    tmp.write_all(bytes)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    tmp.as_file().sync_all().ok(); // best-effort fsync file
    tmp.persist(target)
        .with_context(|| format!("rename to {}", target.display()))?;
    Ok(())
}
