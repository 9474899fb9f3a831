use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeckitError {
    #[error("feature directory not found for '{name}' in {}", .specs_dir.display())]
    FeatureNotFound { name: String, specs_dir: PathBuf },

    #[error("feature directory does not exist: {}", .0.display())]
    FeatureDirMissing(PathBuf),

    #[error(
        "multiple feature directories match prefix '{prefix}': {}; pass --feature to pick one",
        .candidates.join(", ")
    )]
    AmbiguousFeature {
        prefix: String,
        candidates: Vec<String>,
    },

    #[error("feature already exists: {}", .0.display())]
    FeatureExists(PathBuf),

    #[error("{artifact} not found in {}; run {hint} first", .feature_dir.display())]
    MissingArtifact {
        artifact: String,
        feature_dir: PathBuf,
        hint: String,
    },

    #[error("not on a feature branch: '{0}' (feature branches look like 001-feature-name)")]
    NotFeatureBranch(String),

    #[error("invalid branch name '{0}'")]
    InvalidBranchName(String),

    #[error("feature description cannot be empty")]
    EmptyDescription,

    #[error("feature sequence number out of range in '{0}'")]
    InvalidSequenceNumber(String),

    #[error("unknown agent '{0}': expected claude, gemini or copilot")]
    UnknownAgent(String),

    #[error("git not found on PATH; pass --branch and --root explicitly")]
    GitNotInstalled,

    #[error("git command failed: git {command}: {stderr}")]
    Git { command: String, stderr: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpeckitError>;
