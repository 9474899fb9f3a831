pub mod agent_context;
pub mod check;
pub mod config;
pub mod create;
pub mod paths;
pub mod plan;

use anyhow::Context;
use speckit_core::{config::Config, git, workspace::Workspace};
use std::path::PathBuf;

/// Global flags shared by every subcommand.
pub struct Invocation {
    pub root: PathBuf,
    pub branch: Option<String>,
    pub feature: Option<String>,
    pub json: bool,
}

impl Invocation {
    pub fn config(&self) -> anyhow::Result<Config> {
        Config::load(&self.root).context("failed to load .specify/config.yaml")
    }

    /// Workspace bound to `--branch`, or to the checked-out git branch.
    ///
    /// With `--feature` the branch is informational only, so a failed git
    /// lookup is not fatal.
    pub fn workspace(&self) -> anyhow::Result<Workspace> {
        let branch = match self.branch.as_deref() {
            Some(b) => b.to_string(),
            None => match git::current_branch(&self.root) {
                Ok(b) => b,
                Err(e) if self.feature.is_some() => {
                    tracing::debug!("no branch, relying on --feature: {e}");
                    String::new()
                }
                Err(e) => {
                    return Err(anyhow::Error::new(e).context(format!(
                        "cannot determine the current branch in {}; pass --branch or --feature",
                        self.root.display()
                    )))
                }
            },
        };
        tracing::debug!(%branch, root = %self.root.display(), "workspace");
        Ok(Workspace::new(&self.root, branch, self.config()?)?)
    }

    /// Workspace for commands that do not depend on the active branch.
    pub fn workspace_without_branch(&self) -> anyhow::Result<Workspace> {
        let branch = self.branch.clone().unwrap_or_default();
        Ok(Workspace::new(&self.root, branch, self.config()?)?)
    }

    pub fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }
}
