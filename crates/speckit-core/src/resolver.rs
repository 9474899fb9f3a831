//! Feature directory resolution.
//!
//! The resolver is pure with respect to process state: the branch name and
//! any override are passed in, and the only side effect is reading the
//! specs directory listing.

use crate::error::{Result, SpeckitError};
use crate::paths;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// Named explicitly through `--feature` / `SPECIFY_FEATURE`.
    Override,
    /// A directory named exactly after the branch.
    Branch,
    /// The single directory sharing the branch's sequence number.
    Prefix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureDir {
    pub path: PathBuf,
    pub name: String,
    pub source: ResolutionSource,
}

/// Resolve the feature directory for `branch` inside `specs_dir`.
///
/// `root` anchors relative override paths. Both `root` and `specs_dir` are
/// made absolute first, so the returned path is always absolute.
pub fn resolve_feature_dir(
    root: &Path,
    specs_dir: &Path,
    branch: &str,
    override_name: Option<&str>,
) -> Result<FeatureDir> {
    let root = paths::absolutize(root)?;
    let specs_dir = paths::absolutize(specs_dir)?;

    if let Some(name) = override_name.map(str::trim).filter(|n| !n.is_empty()) {
        return resolve_override(&root, &specs_dir, name);
    }

    let slug = paths::branch_slug(branch.trim());
    if slug.is_empty() {
        return Err(not_found(branch, &specs_dir));
    }

    let exact = specs_dir.join(slug);
    if exact.is_dir() {
        tracing::debug!(dir = %exact.display(), "resolved feature dir from branch");
        return Ok(FeatureDir {
            path: exact,
            name: slug.to_string(),
            source: ResolutionSource::Branch,
        });
    }

    let Some(prefix) = paths::sequence_prefix(slug) else {
        return Err(not_found(branch, &specs_dir));
    };

    let mut candidates = prefix_matches(&specs_dir, prefix)?;
    match candidates.len() {
        0 => Err(not_found(branch, &specs_dir)),
        1 => {
            let name = candidates.remove(0);
            tracing::debug!(%name, prefix, "resolved feature dir by sequence prefix");
            Ok(FeatureDir {
                path: specs_dir.join(&name),
                name,
                source: ResolutionSource::Prefix,
            })
        }
        _ => Err(SpeckitError::AmbiguousFeature {
            prefix: prefix.to_string(),
            candidates,
        }),
    }
}

fn resolve_override(root: &Path, specs_dir: &Path, name: &str) -> Result<FeatureDir> {
    let as_path = Path::new(name);
    let looks_like_path =
        as_path.is_absolute() || name.contains('/') || name.contains(std::path::MAIN_SEPARATOR);
    let path = if looks_like_path {
        root.join(as_path)
    } else {
        specs_dir.join(name)
    };

    if !path.is_dir() {
        return Err(if looks_like_path {
            SpeckitError::FeatureDirMissing(path)
        } else {
            not_found(name, specs_dir)
        });
    }

    let dir_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());
    tracing::debug!(dir = %path.display(), "resolved feature dir from override");
    Ok(FeatureDir {
        path,
        name: dir_name,
        source: ResolutionSource::Override,
    })
}

/// Directory names in `specs_dir` that start with `<prefix>-`, sorted.
fn prefix_matches(specs_dir: &Path, prefix: &str) -> Result<Vec<String>> {
    if !specs_dir.is_dir() {
        return Ok(Vec::new());
    }
    let wanted = format!("{prefix}-");
    let mut names = Vec::new();
    for entry in std::fs::read_dir(specs_dir)? {
        let entry = entry?;
        // Follows symlinks, matching the exact-name lookup.
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with(&wanted) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

fn not_found(name: &str, specs_dir: &Path) -> SpeckitError {
    SpeckitError::FeatureNotFound {
        name: name.to_string(),
        specs_dir: specs_dir.to_path_buf(),
    }
}
