use super::Invocation;
use crate::output::print_json_line;
use anyhow::Context;

pub fn run(inv: &Invocation) -> anyhow::Result<()> {
    let ws = inv.workspace()?;
    let paths = ws
        .feature_paths(inv.feature())
        .context("cannot resolve the feature directory")?;

    if inv.json {
        return print_json_line(&paths);
    }

    println!("REPO_ROOT: {}", paths.repo_root.display());
    println!("BRANCH: {}", paths.branch);
    println!("FEATURE_DIR: {}", paths.feature_dir.display());
    println!("FEATURE_SPEC: {}", paths.feature_spec.display());
    println!("IMPL_PLAN: {}", paths.impl_plan.display());
    println!("TASKS: {}", paths.tasks.display());
    println!("RESEARCH: {}", paths.research.display());
    println!("DATA_MODEL: {}", paths.data_model.display());
    println!("QUICKSTART: {}", paths.quickstart.display());
    println!("CONTRACTS_DIR: {}", paths.contracts_dir.display());
    Ok(())
}
