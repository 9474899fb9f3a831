use crate::availability;
use crate::error::{Result, SpeckitError};
use crate::paths::FeaturePaths;
use crate::types::Artifact;
use serde::Serialize;
use std::path::PathBuf;

/// Flags accepted by `speckit check`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Report paths only; skips every `require_*` validation.
    pub paths_only: bool,
    pub require_plan: bool,
    pub require_tasks: bool,
    /// Add the `TASKS` path when tasks.md exists.
    pub include_tasks: bool,
}

/// What a command template needs to know about the current feature.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrerequisiteReport {
    #[serde(rename = "FEATURE_DIR")]
    pub feature_dir: PathBuf,
    #[serde(rename = "AVAILABLE_DOCS")]
    pub available_docs: Vec<Artifact>,
    #[serde(rename = "TASKS", skip_serializing_if = "Option::is_none")]
    pub tasks: Option<PathBuf>,
}

impl PrerequisiteReport {
    /// Inspect the feature directory and enforce the requested prerequisites.
    pub fn build(paths: &FeaturePaths, opts: &CheckOptions) -> Result<Self> {
        let available_docs = availability::available_docs(&paths.feature_dir);

        if !opts.paths_only {
            let required = [
                (opts.require_plan, Artifact::Plan),
                (opts.require_tasks, Artifact::Tasks),
            ];
            for (_, artifact) in required.iter().filter(|(wanted, _)| *wanted) {
                if !available_docs.contains(artifact) {
                    return Err(SpeckitError::MissingArtifact {
                        artifact: artifact.display_name().to_string(),
                        feature_dir: paths.feature_dir.clone(),
                        hint: artifact.producer().to_string(),
                    });
                }
            }
        }

        let tasks = (opts.include_tasks
            && !opts.paths_only
            && available_docs.contains(&Artifact::Tasks))
        .then(|| paths.tasks.clone());

        Ok(Self {
            feature_dir: paths.feature_dir.clone(),
            available_docs,
            tasks,
        })
    }

    /// Single-line JSON, as consumed by command templates.
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
