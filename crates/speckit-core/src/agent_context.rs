//! Refresh agent context files (CLAUDE.md and friends) from a feature plan.

use crate::error::{Result, SpeckitError};
use crate::io;
use crate::paths;
use crate::templates;
use crate::types::{Agent, Artifact};
use crate::workspace::Workspace;
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::OnceLock;

pub const MANUAL_START: &str = "<!-- MANUAL ADDITIONS START -->";
pub const MANUAL_END: &str = "<!-- MANUAL ADDITIONS END -->";

const PLACEHOLDERS: &[&str] = &["NEEDS CLARIFICATION", "N/A"];

// ---------------------------------------------------------------------------
// TechInfo
// ---------------------------------------------------------------------------

/// Technical context fields pulled from plan.md.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechInfo {
    pub language: Option<String>,
    pub framework: Option<String>,
    pub testing: Option<String>,
    pub storage: Option<String>,
    pub project_type: Option<String>,
}

static FIELD_RE: OnceLock<Regex> = OnceLock::new();

fn field_re() -> &'static Regex {
    FIELD_RE.get_or_init(|| {
        Regex::new(r"(?m)^\*\*([A-Za-z/ ]+)\*\*:[ \t]*(.+?)[ \t]*$").expect("valid regex")
    })
}

impl TechInfo {
    pub fn from_plan(text: &str) -> Self {
        let mut info = TechInfo::default();
        for caps in field_re().captures_iter(text) {
            let value = caps[2].trim();
            if value.is_empty() || PLACEHOLDERS.contains(&value) {
                continue;
            }
            let slot = match &caps[1] {
                "Language/Version" => &mut info.language,
                "Primary Dependencies" => &mut info.framework,
                "Testing" => &mut info.testing,
                "Storage" => &mut info.storage,
                "Project Type" => &mut info.project_type,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.to_string());
            }
        }
        info
    }

    /// `"<language> + <framework>"`, omitting whichever is unknown.
    pub fn stack(&self) -> String {
        [self.language.as_deref(), self.framework.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" + ")
    }

    fn is_web(&self) -> bool {
        self.project_type
            .as_deref()
            .is_some_and(|t| t.to_lowercase().contains("web"))
    }

    /// Build and lint commands for the plan's language, when known.
    fn commands(&self) -> Option<&'static str> {
        let lang = self.language.as_deref()?.to_lowercase();
        if lang.contains("python") {
            Some("cd src && pytest && ruff check .")
        } else if lang.contains("rust") {
            Some("cargo test && cargo clippy")
        } else if lang.contains("javascript") || lang.contains("typescript") {
            Some("npm test && npm run lint")
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Fill a fresh agent file from `template`.
pub fn render_new(
    template: &str,
    tech: &TechInfo,
    project_name: &str,
    branch: &str,
    date: NaiveDate,
) -> String {
    let stack = tech.stack();
    let structure = if tech.is_web() {
        "backend/\nfrontend/\ntests/"
    } else {
        "src/\ntests/"
    };
    let language = tech.language.as_deref().unwrap_or("your language");
    let commands = tech
        .commands()
        .map(str::to_string)
        .unwrap_or_else(|| format!("# Add commands for {language}"));
    let style = format!(
        "{}: Follow standard conventions",
        tech.language.as_deref().unwrap_or("Language")
    );

    template
        .replace("[PROJECT NAME]", project_name)
        .replace("[DATE]", &date.format("%Y-%m-%d").to_string())
        .replace("[EXTRACTED FROM ALL PLAN.MD FILES]", &format!("- {stack} ({branch})"))
        .replace("[ACTUAL STRUCTURE FROM PLANS]", structure)
        .replace("[ONLY COMMANDS FOR ACTIVE TECHNOLOGIES]", &commands)
        .replace("[LANGUAGE-SPECIFIC, ONLY FOR LANGUAGES IN USE]", &style)
        .replace("[LAST 3 FEATURES AND WHAT THEY ADDED]", &change_entry(branch, &stack))
}

fn change_entry(branch: &str, stack: &str) -> String {
    if stack.is_empty() {
        format!("- {branch}")
    } else {
        format!("- {branch}: Added {stack}")
    }
}

/// Merge the plan's technologies into an existing agent file.
///
/// The manual additions block is carried over byte for byte.
pub fn update_existing(content: &str, tech: &TechInfo, branch: &str, date: NaiveDate) -> String {
    let (mut body, manual) = split_manual_block(content);
    let stack = tech.stack();

    if let Some(existing) = section_body(&body, "Active Technologies").map(str::to_string) {
        if tech.language.is_some() && !existing.contains(&stack) {
            append_to_section(&mut body, "Active Technologies", &format!("- {stack} ({branch})"));
        }
        if let Some(storage) = tech.storage.as_deref() {
            if !existing.contains(storage) {
                append_to_section(&mut body, "Active Technologies", &format!("- {storage} ({branch})"));
            }
        }
    }

    if tech.is_web() && !body.contains("frontend/") {
        append_to_section(&mut body, "Project Structure", "frontend/src/      # Web UI");
    }

    if let Some(cmd) = tech.commands() {
        let present = section_body(&body, "Commands").is_some_and(|b| b.contains(cmd));
        if !present {
            append_to_section(&mut body, "Commands", cmd);
        }
    }

    if let Some(changes) = section_body(&body, "Recent Changes") {
        let entry = change_entry(branch, &stack);
        let mut lines = vec![entry.clone()];
        lines.extend(
            changes
                .lines()
                .filter(|l| !l.trim().is_empty() && *l != entry)
                .map(str::to_string),
        );
        lines.truncate(3);
        replace_section(&mut body, "Recent Changes", &lines.join("\n"));
    }

    let body = last_updated_re()
        .replace_all(&body, format!("Last updated: {}", date.format("%Y-%m-%d")))
        .into_owned();

    match manual {
        Some(block) => {
            let mut out = body.trim_end().to_string();
            out.push_str("\n\n");
            out.push_str(&block);
            out.push('\n');
            out
        }
        None => body,
    }
}

static LAST_UPDATED_RE: OnceLock<Regex> = OnceLock::new();

fn last_updated_re() -> &'static Regex {
    LAST_UPDATED_RE
        .get_or_init(|| Regex::new(r"Last updated: \d{4}-\d{2}-\d{2}").expect("valid regex"))
}

fn split_manual_block(content: &str) -> (String, Option<String>) {
    let Some(start) = content.find(MANUAL_START) else {
        return (content.to_string(), None);
    };
    let Some(end_rel) = content[start..].find(MANUAL_END) else {
        return (content.to_string(), None);
    };
    let end = start + end_rel + MANUAL_END.len();
    let mut rest = String::with_capacity(content.len());
    rest.push_str(&content[..start]);
    rest.push_str(&content[end..]);
    (rest, Some(content[start..end].to_string()))
}

/// Byte range of the text under `## <heading>`, up to the next `## ` heading.
fn section_range(content: &str, heading: &str) -> Option<(usize, usize)> {
    let marker = format!("## {heading}\n");
    let start = if content.starts_with(&marker) {
        marker.len()
    } else {
        content.find(&format!("\n{marker}"))? + 1 + marker.len()
    };
    let rest = &content[start..];
    let end = if rest.starts_with("## ") {
        start
    } else {
        rest.find("\n## ")
            .map(|i| start + i + 1)
            .unwrap_or(content.len())
    };
    Some((start, end))
}

fn section_body<'a>(content: &'a str, heading: &str) -> Option<&'a str> {
    section_range(content, heading).map(|(s, e)| &content[s..e])
}

/// Add `line` as the last line of a section, inside a trailing code fence if
/// the section ends with one.
fn append_to_section(content: &mut String, heading: &str, line: &str) {
    let Some((start, end)) = section_range(content, heading) else {
        return;
    };
    let body = content[start..end].trim_end();
    let body_len = body.len();
    let fenced = body_len > 3 && body.ends_with("```") && body[..body_len - 3].ends_with('\n');
    let empty = body.is_empty();

    if fenced {
        content.insert_str(start + body_len - 3, &format!("{line}\n"));
    } else if empty {
        content.insert_str(start, &format!("{line}\n"));
    } else {
        content.insert_str(start + body_len, &format!("\n{line}"));
    }
}

/// Replace the non-blank text of a section, keeping trailing spacing.
fn replace_section(content: &mut String, heading: &str, text: &str) {
    let Some((start, end)) = section_range(content, heading) else {
        return;
    };
    let trimmed = content[start..end].trim_end().len();
    let mut suffix = content[start + trimmed..end].to_string();
    if suffix.is_empty() {
        suffix.push('\n');
    }
    content.replace_range(start..end, &format!("{text}{suffix}"));
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentUpdate {
    pub agent: String,
    pub path: PathBuf,
    pub created: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextRefresh {
    pub branch: String,
    pub tech: TechInfo,
    pub updated: Vec<AgentUpdate>,
}

/// Refresh one agent's file, or every existing one when `agent` is `None`.
/// With no agent files present, CLAUDE.md is created.
pub fn refresh(
    ws: &Workspace,
    override_name: Option<&str>,
    agent: Option<Agent>,
    date: NaiveDate,
) -> Result<ContextRefresh> {
    let fpaths = ws.feature_paths(override_name)?;
    if !fpaths.impl_plan.is_file() {
        return Err(SpeckitError::MissingArtifact {
            artifact: Artifact::Plan.display_name().to_string(),
            feature_dir: fpaths.feature_dir.clone(),
            hint: Artifact::Plan.producer().to_string(),
        });
    }
    let tech = TechInfo::from_plan(&std::fs::read_to_string(&fpaths.impl_plan)?);
    tracing::debug!(?tech, "extracted technical context from plan");

    let targets: Vec<Agent> = match agent {
        Some(a) => vec![a],
        None => {
            let existing: Vec<Agent> = Agent::all()
                .iter()
                .copied()
                .filter(|a| ws.root.join(a.context_file()).is_file())
                .collect();
            if existing.is_empty() {
                vec![Agent::Claude]
            } else {
                existing
            }
        }
    };

    let project_name = ws
        .root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut updated = Vec::with_capacity(targets.len());
    for target in targets {
        let path = ws.root.join(target.context_file());
        let created = !path.is_file();
        let content = if created {
            let template = io::load_template(
                &ws.templates_dir(),
                paths::AGENT_FILE_TEMPLATE,
                templates::AGENT_FILE_TEMPLATE,
            )?;
            render_new(&template, &tech, &project_name, &ws.branch, date)
        } else {
            update_existing(&std::fs::read_to_string(&path)?, &tech, &ws.branch, date)
        };
        io::atomic_write(&path, content.as_bytes())?;
        tracing::info!(agent = target.label(), path = %path.display(), created, "agent context updated");
        updated.push(AgentUpdate {
            agent: target.as_str().to_string(),
            path,
            created,
        });
    }

    Ok(ContextRefresh {
        branch: ws.branch.clone(),
        tech,
        updated,
    })
}
