use super::Invocation;
use crate::output::print_json_line;
use anyhow::Context;
use speckit_core::plan;

pub fn run(inv: &Invocation, force: bool) -> anyhow::Result<()> {
    let ws = inv.workspace()?;
    let setup = plan::setup_plan(&ws, inv.feature(), force).context("failed to set up plan")?;

    if inv.json {
        print_json_line(&setup)?;
    } else {
        println!("FEATURE_SPEC: {}", setup.feature_spec.display());
        println!("IMPL_PLAN: {}", setup.impl_plan.display());
        println!("SPECS_DIR: {}", setup.specs_dir.display());
        println!("BRANCH: {}", setup.branch);
        if !setup.written {
            println!("plan.md already exists; pass --force to overwrite");
        }
    }
    Ok(())
}
