mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, Invocation};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "speckit",
    about = "Resolve the active feature directory and report which spec artifacts exist",
    version,
    propagate_version = true
)]
struct Cli {
    /// Repository root (default: git top-level, then upward search for .specify/ or .git/)
    #[arg(long, global = true, env = "SPECKIT_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Branch to resolve against (default: current git branch)
    #[arg(long, global = true, env = "SPECKIT_BRANCH")]
    branch: Option<String>,

    /// Feature directory name or path, bypassing branch resolution
    #[arg(long, global = true, env = "SPECIFY_FEATURE")]
    feature: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the feature directory and its available design documents
    Check {
        /// Only report paths; skip every --require-* check
        #[arg(long)]
        paths_only: bool,

        /// Fail when plan.md is missing
        #[arg(long)]
        require_plan: bool,

        /// Fail when tasks.md is missing
        #[arg(long)]
        require_tasks: bool,

        /// Include the TASKS path when tasks.md exists
        #[arg(long)]
        include_tasks: bool,
    },

    /// Print every standard path for the current feature without creating anything
    Paths,

    /// Allocate the next feature number, create its branch and scaffold spec.md
    CreateFeature {
        /// Free-text feature description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,

        /// Do not create or switch git branches
        #[arg(long)]
        no_branch: bool,
    },

    /// Ensure the feature directory exists and seed plan.md
    SetupPlan {
        /// Overwrite an existing plan.md
        #[arg(long)]
        force: bool,
    },

    /// Refresh agent context files (CLAUDE.md, GEMINI.md, copilot-instructions.md) from plan.md
    UpdateAgentContext {
        /// claude, gemini or copilot (default: every existing file)
        agent: Option<String>,
    },

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = root::resolve_root(cli.root.as_deref()).and_then(|root| {
        let inv = Invocation {
            root,
            branch: cli.branch,
            feature: cli.feature,
            json: cli.json,
        };
        match cli.command {
            Commands::Check {
                paths_only,
                require_plan,
                require_tasks,
                include_tasks,
            } => cmd::check::run(
                &inv,
                speckit_core::report::CheckOptions {
                    paths_only,
                    require_plan,
                    require_tasks,
                    include_tasks,
                },
            ),
            Commands::Paths => cmd::paths::run(&inv),
            Commands::CreateFeature {
                description,
                no_branch,
            } => cmd::create::run(&inv, &description.join(" "), !no_branch),
            Commands::SetupPlan { force } => cmd::plan::run(&inv, force),
            Commands::UpdateAgentContext { agent } => {
                cmd::agent_context::run(&inv, agent.as_deref())
            }
            Commands::Config { subcommand } => cmd::config::run(&inv, subcommand),
        }
    });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
