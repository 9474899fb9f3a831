use super::Invocation;
use crate::output::print_json_line;
use anyhow::Context;
use speckit_core::feature;

pub fn run(inv: &Invocation, description: &str, create_branch: bool) -> anyhow::Result<()> {
    let ws = inv.workspace_without_branch()?;
    let created = feature::create_feature(&ws, description, create_branch)
        .context("failed to create feature")?;

    if inv.json {
        print_json_line(&created)?;
    } else {
        println!("BRANCH_NAME: {}", created.branch_name);
        println!("SPEC_FILE: {}", created.spec_file.display());
        println!("FEATURE_NUM: {}", created.feature_num);
    }
    Ok(())
}
