use crate::error::{Result, SpeckitError};
use crate::git;
use crate::io;
use crate::paths::{self, FeaturePaths};
use crate::templates;
use crate::workspace::Workspace;
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::OnceLock;

static NUMBERED_DIR_RE: OnceLock<Regex> = OnceLock::new();

fn numbered_dir_re() -> &'static Regex {
    NUMBERED_DIR_RE.get_or_init(|| Regex::new(r"^(\d+)-").expect("valid regex"))
}

/// Turn a free-text description into the word part of a branch name.
///
/// Lowercases, replaces anything outside `[a-z0-9]` with hyphens, collapses
/// runs and keeps the first `max_words` words.
pub fn branch_words(description: &str, max_words: usize) -> Result<String> {
    let lowered = description.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|w| !w.is_empty())
        .take(max_words.max(1))
        .collect();
    if words.is_empty() {
        return Err(SpeckitError::EmptyDescription);
    }
    Ok(words.join("-"))
}

/// Highest sequence number among directories in `specs_dir`, plus one.
///
/// Symlinked directories count. A prefix too large to number from is an
/// error rather than being skipped.
pub fn next_feature_number(specs_dir: &Path) -> Result<u64> {
    let mut highest = 0u64;
    if specs_dir.is_dir() {
        for entry in std::fs::read_dir(specs_dir)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let Some(caps) = numbered_dir_re().captures(&name) else {
                continue;
            };
            let n = caps[1]
                .parse::<u64>()
                .map_err(|_| SpeckitError::InvalidSequenceNumber(name.clone()))?;
            highest = highest.max(n);
        }
    }
    highest
        .checked_add(1)
        .ok_or_else(|| SpeckitError::InvalidSequenceNumber(highest.to_string()))
}

pub fn format_feature_number(n: u64, digits: usize) -> String {
    format!("{n:0digits$}")
}

/// Result of `create-feature`, serialized for command templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CreatedFeature {
    pub branch_name: String,
    pub spec_file: std::path::PathBuf,
    pub feature_num: String,
}

/// Allocate the next feature number, optionally branch, and scaffold spec.md.
pub fn create_feature(
    ws: &Workspace,
    description: &str,
    create_branch: bool,
) -> Result<CreatedFeature> {
    if description.trim().is_empty() {
        return Err(SpeckitError::EmptyDescription);
    }
    let words = branch_words(description, ws.config.branch_words)?;

    let specs_dir = ws.specs_dir();
    io::ensure_dir(&specs_dir)?;

    let number = format_feature_number(
        next_feature_number(&specs_dir)?,
        ws.config.sequence_digits,
    );
    let branch_name = format!("{number}-{words}");
    paths::validate_branch_name(&branch_name)?;
    let feature_dir = specs_dir.join(&branch_name);
    if feature_dir.exists() {
        return Err(SpeckitError::FeatureExists(feature_dir));
    }

    if create_branch {
        git::create_branch(&ws.root, &branch_name)?;
    }

    io::ensure_dir(&feature_dir)?;
    let fpaths = FeaturePaths::new(&ws.root, &branch_name, &feature_dir);
    let template = io::load_template(
        &ws.templates_dir(),
        paths::SPEC_TEMPLATE,
        templates::SPEC_TEMPLATE,
    )?;
    io::write_if_missing(&fpaths.feature_spec, template.as_bytes())?;
    tracing::info!(branch = %branch_name, dir = %feature_dir.display(), "created feature");

    Ok(CreatedFeature {
        branch_name,
        spec_file: fpaths.feature_spec,
        feature_num: number,
    })
}
