use crate::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `path` with `data` in one rename, so readers see either the old
/// artifact or the new one. Parent directories are created.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;
    let mut staged = NamedTempFile::new_in(parent)?;
    staged.write_all(data)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    Ok(std::fs::create_dir_all(path)?)
}

/// Scaffold `path` unless something is already there. Existing artifacts are
/// never touched; the return value says whether a file was written.
pub fn write_if_missing(path: &Path, data: &[u8]) -> Result<bool> {
    if path.try_exists()? {
        tracing::debug!(path = %path.display(), "kept existing file");
        return Ok(false);
    }
    atomic_write(path, data).map(|()| true)
}

/// Read `templates_dir/name`, or return `fallback` when the project ships no
/// template of that name.
pub fn load_template(templates_dir: &Path, name: &str, fallback: &str) -> Result<String> {
    let path = templates_dir.join(name);
    if path.is_file() {
        return Ok(std::fs::read_to_string(&path)?);
    }
    tracing::debug!(template = %path.display(), "template not found, using built-in default");
    Ok(fallback.to_string())
}

/// True when `path` is a directory with at least one entry.
pub fn dir_has_entries(path: &Path) -> bool {
    std::fs::read_dir(path)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}
