#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn speckit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("speckit").unwrap();
    cmd.current_dir(dir.path())
        .env("SPECKIT_ROOT", dir.path())
        .env_remove("SPECKIT_BRANCH")
        .env_remove("SPECIFY_FEATURE")
        .env_remove("SPECIFY_SPEC_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn feature(dir: &TempDir, name: &str, files: &[&str]) {
    let fdir = dir.path().join("specs").join(name);
    std::fs::create_dir_all(&fdir).unwrap();
    for f in files {
        let path = fdir.join(f);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "# doc\n").unwrap();
    }
}

fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout is JSON")
}

fn feature_dir(dir: &TempDir, name: &str) -> String {
    dir.path().join("specs").join(name).display().to_string()
}

// ---------------------------------------------------------------------------
// speckit check
// ---------------------------------------------------------------------------

#[test]
fn check_paths_only_emits_minimal_json() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "003-login", &["plan.md"]);

    let expected = format!(
        "{{\"FEATURE_DIR\":\"{}\",\"AVAILABLE_DOCS\":[\"plan.md\"]}}\n",
        feature_dir(&dir, "003-login")
    );
    speckit(&dir)
        .args(["--json", "--branch", "003-login", "check", "--paths-only"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn check_require_tasks_fails_with_empty_stdout() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "003-login", &["plan.md"]);

    speckit(&dir)
        .args(["check", "--json", "--require-tasks", "--branch", "003-login"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("tasks.md not found"))
        .stderr(predicate::str::contains("/speckit.tasks"));
}

#[test]
fn check_require_tasks_and_include_tasks() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "003-login", &["plan.md", "tasks.md", "research.md"]);

    let out = speckit(&dir)
        .args([
            "check",
            "--json",
            "--require-tasks",
            "--include-tasks",
            "--branch",
            "003-login",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value = stdout_json(&out);
    assert_eq!(
        value["AVAILABLE_DOCS"],
        serde_json::json!(["plan.md", "tasks.md", "research.md"])
    );
    let tasks = value["TASKS"].as_str().unwrap();
    assert_eq!(
        Path::new(tasks),
        dir.path().join("specs/003-login/tasks.md")
    );
}

#[test]
fn check_reports_nonempty_contracts_dir() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "003-login", &["contracts/api.yaml", "quickstart.md"]);

    let out = speckit(&dir)
        .args(["check", "--json", "--branch", "003-login"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(
        stdout_json(&out)["AVAILABLE_DOCS"],
        serde_json::json!(["quickstart.md", "contracts/"])
    );
}

#[test]
fn check_without_matching_dir_fails() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "001-other", &["plan.md"]);

    speckit(&dir)
        .args(["check", "--json", "--branch", "003-login"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn check_ambiguous_prefix_fails() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "003-a", &[]);
    feature(&dir, "003-b", &[]);

    speckit(&dir)
        .args(["check", "--json", "--branch", "003-c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("003-a, 003-b"));
}

#[test]
fn check_feature_override_from_env() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "003-login", &["plan.md"]);
    feature(&dir, "005-export", &["tasks.md"]);

    let out = speckit(&dir)
        .env("SPECIFY_FEATURE", "005-export")
        .args(["check", "--json", "--branch", "003-login"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value = stdout_json(&out);
    assert_eq!(value["FEATURE_DIR"], feature_dir(&dir, "005-export"));
    assert_eq!(value["AVAILABLE_DOCS"], serde_json::json!(["tasks.md"]));
}

#[test]
fn check_relative_root_yields_absolute_feature_dir() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "003-login", &["plan.md"]);

    let out = speckit(&dir)
        .env_remove("SPECKIT_ROOT")
        .args(["--root", ".", "check", "--json", "--branch", "003-login"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value = stdout_json(&out);
    let fdir = Path::new(value["FEATURE_DIR"].as_str().unwrap());
    assert!(fdir.is_absolute(), "not absolute: {}", fdir.display());
    assert!(fdir.ends_with("specs/003-login"));
}

#[test]
fn check_output_is_deterministic() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "003-login", &["plan.md", "data-model.md", "research.md"]);

    let run = || {
        speckit(&dir)
            .args(["check", "--json", "--include-tasks", "--branch", "003-login"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn check_human_readable_listing() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "003-login", &["plan.md"]);

    speckit(&dir)
        .args(["check", "--branch", "003-login"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "FEATURE_DIR:{}",
            feature_dir(&dir, "003-login")
        )))
        .stdout(predicate::str::contains("✓ plan.md"))
        .stdout(predicate::str::contains("✗ tasks.md"));
}

#[test]
fn check_honours_spec_dir_env() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("docs/003-login")).unwrap();

    speckit(&dir)
        .env("SPECIFY_SPEC_DIR", "docs")
        .args(["check", "--json", "--branch", "003-login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docs/003-login"));
}

#[test]
fn rust_log_debug_traces_resolution_on_stderr() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "003-login", &["plan.md"]);

    let expected = format!(
        "{{\"FEATURE_DIR\":\"{}\",\"AVAILABLE_DOCS\":[\"plan.md\"]}}\n",
        feature_dir(&dir, "003-login")
    );
    speckit(&dir)
        .env("RUST_LOG", "debug")
        .args(["check", "--json", "--paths-only", "--branch", "003-login"])
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("resolved feature dir from branch"));
}

#[test]
fn default_log_level_keeps_stderr_quiet() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "003-login", &["plan.md"]);

    speckit(&dir)
        .args(["check", "--json", "--branch", "003-login"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_feature_path_override_names_the_path() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "003-login", &["plan.md"]);

    speckit(&dir)
        .args(["check", "--feature", "elsewhere/009-x", "--branch", "003-login"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("elsewhere/009-x"));
}

// ---------------------------------------------------------------------------
// speckit paths
// ---------------------------------------------------------------------------

#[test]
fn paths_lists_every_standard_path() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "002-search", &[]);

    let out = speckit(&dir)
        .args(["paths", "--json", "--branch", "002-search"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value = stdout_json(&out);
    for key in [
        "REPO_ROOT",
        "BRANCH",
        "FEATURE_DIR",
        "FEATURE_SPEC",
        "IMPL_PLAN",
        "TASKS",
        "RESEARCH",
        "DATA_MODEL",
        "QUICKSTART",
        "CONTRACTS_DIR",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["BRANCH"], "002-search");
    // Nothing is created.
    assert!(!dir.path().join("specs/002-search/plan.md").exists());
}

// ---------------------------------------------------------------------------
// speckit create-feature / setup-plan
// ---------------------------------------------------------------------------

#[test]
fn create_feature_without_branch() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "001-existing", &[]);

    let out = speckit(&dir)
        .args(["create-feature", "--json", "--no-branch", "Team", "calendar", "sync", "v2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value = stdout_json(&out);
    assert_eq!(value["BRANCH_NAME"], "002-team-calendar-sync");
    assert_eq!(value["FEATURE_NUM"], "002");
    assert!(dir.path().join("specs/002-team-calendar-sync/spec.md").is_file());
}

#[test]
fn create_feature_rejects_symbols_only() {
    let dir = TempDir::new().unwrap();
    speckit(&dir)
        .args(["create-feature", "--no-branch", "???"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
}

#[test]
fn setup_plan_then_check_requires_plan() {
    let dir = TempDir::new().unwrap();

    speckit(&dir)
        .args(["check", "--require-plan", "--branch", "004-billing"])
        .assert()
        .failure();

    speckit(&dir)
        .args(["setup-plan", "--json", "--branch", "004-billing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"IMPL_PLAN\""));

    speckit(&dir)
        .args(["check", "--json", "--require-plan", "--branch", "004-billing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"AVAILABLE_DOCS\":[\"plan.md\"]"));
}

#[test]
fn setup_plan_rejects_non_feature_branch() {
    let dir = TempDir::new().unwrap();
    speckit(&dir)
        .args(["setup-plan", "--branch", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not on a feature branch"));
}

// ---------------------------------------------------------------------------
// speckit update-agent-context
// ---------------------------------------------------------------------------

#[test]
fn update_agent_context_creates_claude_file() {
    let dir = TempDir::new().unwrap();
    let fdir = dir.path().join("specs/003-cart");
    std::fs::create_dir_all(&fdir).unwrap();
    std::fs::write(
        fdir.join("plan.md"),
        "**Language/Version**: Python 3.12\n**Primary Dependencies**: FastAPI\n",
    )
    .unwrap();

    speckit(&dir)
        .args(["update-agent-context", "--branch", "003-cart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let content = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
    assert!(content.contains("- Python 3.12 + FastAPI (003-cart)"));
    assert!(content.contains("pytest"));
}

#[test]
fn update_agent_context_unknown_agent_fails() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "003-cart", &["plan.md"]);
    speckit(&dir)
        .args(["update-agent-context", "cursor", "--branch", "003-cart"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown agent"));
}

#[test]
fn update_agent_context_requires_plan() {
    let dir = TempDir::new().unwrap();
    feature(&dir, "003-cart", &[]);
    speckit(&dir)
        .args(["update-agent-context", "--branch", "003-cart"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plan.md not found"));
}

// ---------------------------------------------------------------------------
// speckit config
// ---------------------------------------------------------------------------

#[test]
fn config_show_defaults() {
    let dir = TempDir::new().unwrap();
    let out = speckit(&dir)
        .args(["config", "show", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value = stdout_json(&out);
    assert_eq!(value["specs_dir"], "specs");
    assert_eq!(value["sequence_digits"], 3);
}

#[test]
fn config_validate_rejects_bad_values() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".specify")).unwrap();
    std::fs::write(
        dir.path().join(".specify/config.yaml"),
        "branch_words: 0\n",
    )
    .unwrap();

    speckit(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("branch_words must be at least 1"));
}
