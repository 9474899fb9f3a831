use crate::error::{Result, SpeckitError};
use crate::io;
use crate::paths::{self, FeaturePaths};
use crate::templates;
use crate::workspace::Workspace;
use serde::Serialize;
use std::path::PathBuf;

/// Result of `setup-plan`, serialized for command templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PlanSetup {
    pub feature_spec: PathBuf,
    pub impl_plan: PathBuf,
    pub specs_dir: PathBuf,
    pub branch: String,
    /// False when an existing plan.md was kept.
    #[serde(skip)]
    pub written: bool,
}

/// Make sure the feature directory exists and seed plan.md from the template.
///
/// With an override the named directory must already exist. Otherwise the
/// branch must be a feature branch; its directory is created when no
/// existing one resolves.
pub fn setup_plan(ws: &Workspace, override_name: Option<&str>, force: bool) -> Result<PlanSetup> {
    let feature_dir = match ws.resolve(override_name) {
        Ok(dir) => dir.path,
        Err(SpeckitError::FeatureNotFound { .. }) if override_name.is_none() => {
            if !paths::is_feature_branch(&ws.branch) {
                return Err(SpeckitError::NotFeatureBranch(ws.branch.clone()));
            }
            let dir = ws.specs_dir().join(paths::branch_slug(&ws.branch));
            io::ensure_dir(&dir)?;
            tracing::info!(dir = %dir.display(), "created feature directory");
            dir
        }
        Err(e) => return Err(e),
    };

    let fpaths = FeaturePaths::new(&ws.root, &ws.branch, &feature_dir);
    let template = io::load_template(
        &ws.templates_dir(),
        paths::PLAN_TEMPLATE,
        templates::PLAN_TEMPLATE,
    )?;
    let written = if force {
        io::atomic_write(&fpaths.impl_plan, template.as_bytes())?;
        true
    } else {
        io::write_if_missing(&fpaths.impl_plan, template.as_bytes())?
    };
    if !written {
        tracing::info!(plan = %fpaths.impl_plan.display(), "plan.md exists, keeping it");
    }

    Ok(PlanSetup {
        feature_spec: fpaths.feature_spec,
        impl_plan: fpaths.impl_plan,
        specs_dir: fpaths.feature_dir,
        branch: ws.branch.clone(),
        written,
    })
}
