//! Thin wrappers over the `git` binary.
//!
//! Only the CLI layer calls these; the resolver takes the branch name as an
//! explicit argument.

use crate::error::{Result, SpeckitError};
use std::path::{Path, PathBuf};
use std::process::Command;

fn run(cwd: &Path, args: &[&str]) -> Result<String> {
    let git = which::which("git").map_err(|_| SpeckitError::GitNotInstalled)?;
    tracing::debug!(cwd = %cwd.display(), "git {}", args.join(" "));
    let output = Command::new(git).args(args).current_dir(cwd).output()?;
    if !output.status.success() {
        return Err(SpeckitError::Git {
            command: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Top-level directory of the repository containing `cwd`.
pub fn repo_root(cwd: &Path) -> Result<PathBuf> {
    run(cwd, &["rev-parse", "--show-toplevel"]).map(PathBuf::from)
}

/// Name of the checked-out branch.
///
/// A freshly initialized repository has no commit for `HEAD` to resolve, so
/// the symbolic ref is consulted when `rev-parse` fails.
pub fn current_branch(root: &Path) -> Result<String> {
    match run(root, &["rev-parse", "--abbrev-ref", "HEAD"]) {
        Ok(branch) => Ok(branch),
        Err(SpeckitError::Git { .. }) => run(root, &["symbolic-ref", "--short", "HEAD"]),
        Err(e) => Err(e),
    }
}

/// Create `name` and switch to it.
pub fn create_branch(root: &Path, name: &str) -> Result<()> {
    run(root, &["checkout", "-b", name]).map(|_| ())
}
