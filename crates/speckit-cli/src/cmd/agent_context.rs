use super::Invocation;
use crate::output::print_json;
use anyhow::Context;
use speckit_core::{agent_context, types::Agent};
use std::str::FromStr;

pub fn run(inv: &Invocation, agent: Option<&str>) -> anyhow::Result<()> {
    let agent = agent.map(Agent::from_str).transpose()?;
    let ws = inv.workspace()?;
    let today = chrono::Local::now().date_naive();
    let refresh = agent_context::refresh(&ws, inv.feature(), agent, today)
        .context("failed to update agent context")?;

    if inv.json {
        return print_json(&refresh);
    }

    println!("=== Updated agent context for {} ===", refresh.branch);
    for update in &refresh.updated {
        let verb = if update.created { "Created" } else { "Updated" };
        println!("{verb} {}", update.path.display());
    }

    let tech = &refresh.tech;
    let summary = [
        ("language", &tech.language),
        ("framework", &tech.framework),
        ("database", &tech.storage),
    ];
    if summary.iter().any(|(_, v)| v.is_some()) {
        println!("\nSummary of changes:");
        for (label, value) in summary {
            if let Some(v) = value {
                println!("- Added {label}: {v}");
            }
        }
    }
    Ok(())
}
