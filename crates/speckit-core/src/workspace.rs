use crate::config::Config;
use crate::error::Result;
use crate::paths::{self, FeaturePaths};
use crate::resolver::{self, FeatureDir};
use std::path::{Path, PathBuf};

/// Repository root, active branch and configuration for one invocation.
///
/// Built once by the CLI from flags, environment and git; every operation
/// below reads the filesystem fresh.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub branch: String,
    pub config: Config,
}

impl Workspace {
    pub fn new(root: &Path, branch: impl Into<String>, config: Config) -> Result<Self> {
        Ok(Self {
            root: paths::absolutize(root)?,
            branch: branch.into(),
            config,
        })
    }

    pub fn specs_dir(&self) -> PathBuf {
        self.config.specs_dir(&self.root)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.config.templates_dir(&self.root)
    }

    pub fn resolve(&self, override_name: Option<&str>) -> Result<FeatureDir> {
        resolver::resolve_feature_dir(&self.root, &self.specs_dir(), &self.branch, override_name)
    }

    /// Resolve the feature directory and expand it into every standard path.
    pub fn feature_paths(&self, override_name: Option<&str>) -> Result<FeaturePaths> {
        let dir = self.resolve(override_name)?;
        Ok(FeaturePaths::new(&self.root, &self.branch, &dir.path))
    }
}
