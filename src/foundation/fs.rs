use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::ProbeResult;

/// Create `path`'s parent directory (and ancestors) if missing.
pub fn ensure_parent_dir(path: &Path) -> ProbeResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Overwrite `path` in place with `bytes`, creating parent directories first.
///
/// The file is truncated and rewritten rather than replaced, so watchers observe a
/// modification of the same inode.
pub fn write_file(path: &Path, bytes: &[u8]) -> ProbeResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Delete a file the harness created earlier.
pub fn remove_file(path: &Path) -> ProbeResult<()> {
    std::fs::remove_file(path)
        .with_context(|| format!("failed to remove '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/fs.rs"]
mod tests;
