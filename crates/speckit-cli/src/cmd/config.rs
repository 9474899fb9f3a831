use super::Invocation;
use crate::output::{print_json, print_table};
use clap::Subcommand;
use speckit_core::config::WarnLevel;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective configuration (file, defaults and SPECIFY_SPEC_DIR)
    Show,
    /// Check the configuration for problems
    Validate,
}

pub fn run(inv: &Invocation, subcmd: ConfigSubcommand) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(inv),
        ConfigSubcommand::Validate => validate(inv),
    }
}

fn show(inv: &Invocation) -> anyhow::Result<()> {
    let config = inv.config()?;

    if inv.json {
        return print_json(&config);
    }

    let rows = vec![
        vec!["specs_dir".to_string(), config.specs_dir.clone()],
        vec!["templates_dir".to_string(), config.templates_dir.clone()],
        vec!["sequence_digits".to_string(), config.sequence_digits.to_string()],
        vec!["branch_words".to_string(), config.branch_words.to_string()],
    ];
    print_table(&["KEY", "VALUE"], rows);
    Ok(())
}

fn validate(inv: &Invocation) -> anyhow::Result<()> {
    let config = inv.config()?;
    let warnings = config.validate();
    let errors = warnings
        .iter()
        .filter(|w| w.level == WarnLevel::Error)
        .count();

    if inv.json {
        print_json(&serde_json::json!({
            "valid": errors == 0,
            "warnings": warnings,
        }))?;
    } else if warnings.is_empty() {
        println!("Configuration OK");
    } else {
        for w in &warnings {
            let tag = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("{tag}: {}", w.message);
        }
    }

    if errors > 0 {
        anyhow::bail!("configuration has {errors} error(s)");
    }
    Ok(())
}
