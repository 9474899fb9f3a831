use crate::error::{Result, SpeckitError};
use crate::types::Artifact;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const SPECIFY_DIR: &str = ".specify";
pub const CONFIG_FILE: &str = ".specify/config.yaml";
pub const DEFAULT_SPECS_DIR: &str = "specs";
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

pub const SPEC_FILE: &str = "spec.md";
pub const SPEC_TEMPLATE: &str = "spec-template.md";
pub const PLAN_TEMPLATE: &str = "plan-template.md";
pub const AGENT_FILE_TEMPLATE: &str = "agent-file-template.md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn artifact_path(feature_dir: &Path, artifact: Artifact) -> PathBuf {
    feature_dir.join(artifact.filename())
}

/// Anchor `path` at the current working directory when it is relative.
///
/// Does not touch the filesystem and does not resolve symlinks, so the
/// result is stable for paths that do not exist yet.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        std::path::absolute(path)
    }
}

// ---------------------------------------------------------------------------
// Branch names
// ---------------------------------------------------------------------------

static SEQUENCE_RE: OnceLock<Regex> = OnceLock::new();

fn sequence_re() -> &'static Regex {
    SEQUENCE_RE.get_or_init(|| Regex::new(r"^(\d{3,})-").expect("valid regex"))
}

/// Strip a namespace such as `feature/` or `spec/` from a branch name.
pub fn branch_slug(branch: &str) -> &str {
    branch.rsplit('/').next().unwrap_or(branch)
}

/// The zero-padded sequence prefix of a feature name (`"003"` for `003-login`).
pub fn sequence_prefix(name: &str) -> Option<&str> {
    sequence_re()
        .captures(branch_slug(name))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

pub fn is_feature_branch(branch: &str) -> bool {
    sequence_prefix(branch).is_some()
}

/// Longest branch name hosting services accept.
pub const MAX_BRANCH_BYTES: usize = 244;

/// Reject names git or the hosting remote would refuse.
pub fn validate_branch_name(name: &str) -> Result<()> {
    let bad_char = name
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || "~^:?*[\\".contains(c));
    if name.is_empty()
        || name.len() > MAX_BRANCH_BYTES
        || bad_char
        || name.contains("..")
        || name.starts_with('-')
        || name.ends_with('/')
        || name.ends_with(".lock")
    {
        return Err(SpeckitError::InvalidBranchName(name.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// FeaturePaths
// ---------------------------------------------------------------------------

/// Every standard path for one feature. Nothing here is guaranteed to exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FeaturePaths {
    pub repo_root: PathBuf,
    pub branch: String,
    pub feature_dir: PathBuf,
    pub feature_spec: PathBuf,
    pub impl_plan: PathBuf,
    pub tasks: PathBuf,
    pub research: PathBuf,
    pub data_model: PathBuf,
    pub quickstart: PathBuf,
    pub contracts_dir: PathBuf,
}

impl FeaturePaths {
    pub fn new(repo_root: &Path, branch: &str, feature_dir: &Path) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            branch: branch.to_string(),
            feature_dir: feature_dir.to_path_buf(),
            feature_spec: feature_dir.join(SPEC_FILE),
            impl_plan: artifact_path(feature_dir, Artifact::Plan),
            tasks: artifact_path(feature_dir, Artifact::Tasks),
            research: artifact_path(feature_dir, Artifact::Research),
            data_model: artifact_path(feature_dir, Artifact::DataModel),
            quickstart: artifact_path(feature_dir, Artifact::Quickstart),
            contracts_dir: artifact_path(feature_dir, Artifact::Contracts),
        }
    }

    pub fn artifact(&self, artifact: Artifact) -> &Path {
        match artifact {
            Artifact::Plan => &self.impl_plan,
            Artifact::Tasks => &self.tasks,
            Artifact::DataModel => &self.data_model,
            Artifact::Research => &self.research,
            Artifact::Quickstart => &self.quickstart,
            Artifact::Contracts => &self.contracts_dir,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
