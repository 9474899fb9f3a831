use super::Invocation;
use crate::output::print_check;
use anyhow::Context;
use speckit_core::{
    availability,
    report::{CheckOptions, PrerequisiteReport},
};

pub fn run(inv: &Invocation, opts: CheckOptions) -> anyhow::Result<()> {
    let ws = inv.workspace()?;
    let paths = ws
        .feature_paths(inv.feature())
        .context("cannot resolve the feature directory")?;

    // Validation runs before anything is printed so a failure leaves stdout empty.
    let report = PrerequisiteReport::build(&paths, &opts)?;

    if inv.json {
        println!("{}", report.to_json_line()?);
        return Ok(());
    }

    println!("FEATURE_DIR:{}", report.feature_dir.display());
    println!("AVAILABLE_DOCS:");
    if opts.paths_only {
        for doc in &report.available_docs {
            print_check(doc.display_name(), true);
        }
    } else {
        for (artifact, present) in availability::check_all(&paths.feature_dir) {
            print_check(artifact.display_name(), present);
        }
    }
    if let Some(tasks) = &report.tasks {
        println!("TASKS:{}", tasks.display());
    }
    Ok(())
}
