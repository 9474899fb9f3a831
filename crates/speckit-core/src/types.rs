use serde::{Serialize, Serializer};
use std::fmt;

// ---------------------------------------------------------------------------
// Artifact
// ---------------------------------------------------------------------------

/// Optional design documents that may live in a feature directory.
///
/// `spec.md` is not listed here: it is the feature's root document and is
/// addressed through [`crate::paths::FeaturePaths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Artifact {
    Plan,
    Tasks,
    DataModel,
    Research,
    Quickstart,
    Contracts,
}

impl Artifact {
    /// Fixed candidate order used for availability reports.
    pub fn candidates() -> &'static [Artifact] {
        &[
            Artifact::Plan,
            Artifact::Tasks,
            Artifact::DataModel,
            Artifact::Research,
            Artifact::Quickstart,
            Artifact::Contracts,
        ]
    }

    /// Name on disk, relative to the feature directory.
    pub fn filename(self) -> &'static str {
        match self {
            Artifact::Plan => "plan.md",
            Artifact::Tasks => "tasks.md",
            Artifact::DataModel => "data-model.md",
            Artifact::Research => "research.md",
            Artifact::Quickstart => "quickstart.md",
            Artifact::Contracts => "contracts",
        }
    }

    /// Name as reported in `AVAILABLE_DOCS`. Directories carry a trailing slash.
    pub fn display_name(self) -> &'static str {
        match self {
            Artifact::Contracts => "contracts/",
            other => other.filename(),
        }
    }

    pub fn is_dir(self) -> bool {
        matches!(self, Artifact::Contracts)
    }

    /// Slash command that produces this artifact.
    pub fn producer(self) -> &'static str {
        match self {
            Artifact::Tasks => "/speckit.tasks",
            _ => "/speckit.plan",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for Artifact {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Agent
// ---------------------------------------------------------------------------

/// Coding agents whose context files can be refreshed from a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agent {
    Claude,
    Gemini,
    Copilot,
}

impl Agent {
    pub fn all() -> &'static [Agent] {
        &[Agent::Claude, Agent::Gemini, Agent::Copilot]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Agent::Claude => "claude",
            Agent::Gemini => "gemini",
            Agent::Copilot => "copilot",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Agent::Claude => "Claude Code",
            Agent::Gemini => "Gemini CLI",
            Agent::Copilot => "GitHub Copilot",
        }
    }

    /// Context file path relative to the repository root.
    pub fn context_file(self) -> &'static str {
        match self {
            Agent::Claude => "CLAUDE.md",
            Agent::Gemini => "GEMINI.md",
            Agent::Copilot => ".github/copilot-instructions.md",
        }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Agent {
    type Err = crate::error::SpeckitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claude" => Ok(Agent::Claude),
            "gemini" => Ok(Agent::Gemini),
            "copilot" => Ok(Agent::Copilot),
            _ => Err(crate::error::SpeckitError::UnknownAgent(s.to_string())),
        }
    }
}
