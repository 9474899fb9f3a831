use anyhow::Context;
use speckit_core::{git, paths};
use std::path::{Path, PathBuf};

/// Resolve the repository root.
///
/// Priority:
/// 1. `--root` flag / `SPECKIT_ROOT` env var (passed in as `explicit`)
/// 2. `git rev-parse --show-toplevel`
/// 3. Walk upward from `cwd` looking for `.specify/`, then `.git/`
/// 4. Fall back to `cwd`
///
/// The result is always absolute.
pub fn resolve_root(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(p) = explicit {
        return paths::absolutize(p)
            .with_context(|| format!("cannot make '{}' absolute", p.display()));
    }

    let cwd = std::env::current_dir().context("cannot read current directory")?;

    match git::repo_root(&cwd) {
        Ok(root) => return Ok(root),
        Err(e) => tracing::debug!("git root lookup failed: {e}"),
    }

    Ok(find_marker(&cwd, paths::SPECIFY_DIR)
        .or_else(|| find_marker(&cwd, ".git"))
        .unwrap_or(cwd))
}

fn find_marker(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_dir())
        .map(Path::to_path_buf)
}
