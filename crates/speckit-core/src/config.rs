use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `specs_dir`.
pub const SPEC_DIR_ENV: &str = "SPECIFY_SPEC_DIR";

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding feature directories, relative to the repository root.
    #[serde(default = "default_specs_dir")]
    pub specs_dir: String,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    /// Zero padding of feature sequence numbers.
    #[serde(default = "default_sequence_digits")]
    pub sequence_digits: usize,
    /// Words kept from a feature description when naming its branch.
    #[serde(default = "default_branch_words")]
    pub branch_words: usize,
}

fn default_specs_dir() -> String {
    paths::DEFAULT_SPECS_DIR.to_string()
}

fn default_templates_dir() -> String {
    paths::DEFAULT_TEMPLATES_DIR.to_string()
}

fn default_sequence_digits() -> usize {
    3
}

fn default_branch_words() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            specs_dir: default_specs_dir(),
            templates_dir: default_templates_dir(),
            sequence_digits: default_sequence_digits(),
            branch_words: default_branch_words(),
        }
    }
}

impl Config {
    /// Load `.specify/config.yaml`, falling back to defaults when it is absent,
    /// then apply the `SPECIFY_SPEC_DIR` override.
    pub fn load(root: &Path) -> Result<Self> {
        let env = std::env::var(SPEC_DIR_ENV).ok();
        Self::load_with_override(root, env.as_deref())
    }

    pub fn load_with_override(root: &Path, specs_dir: Option<&str>) -> Result<Self> {
        let path = paths::config_path(root);
        let mut cfg = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            serde_yaml::from_str(&data)?
        } else {
            Config::default()
        };
        if let Some(dir) = specs_dir.map(str::trim).filter(|d| !d.is_empty()) {
            tracing::debug!(specs_dir = dir, "specs dir overridden by {SPEC_DIR_ENV}");
            cfg.specs_dir = dir.to_string();
        }
        Ok(cfg)
    }

    pub fn specs_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.specs_dir)
    }

    pub fn templates_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.templates_dir)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.specs_dir.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "specs_dir is empty".to_string(),
            });
        } else if Path::new(&self.specs_dir).is_absolute() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "specs_dir '{}' is absolute; it should be relative to the repository root",
                    self.specs_dir
                ),
            });
        }

        if self.sequence_digits == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "sequence_digits must be at least 1".to_string(),
            });
        } else if self.sequence_digits < 3 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "sequence_digits={} is below 3; branches will not be recognized as feature branches",
                    self.sequence_digits
                ),
            });
        }

        if self.branch_words == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "branch_words must be at least 1".to_string(),
            });
        }

        warnings
    }
}
