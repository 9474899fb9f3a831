use crate::io::dir_has_entries;
use crate::paths::artifact_path;
use crate::types::Artifact;
use std::path::Path;

/// Whether `artifact` is present in `feature_dir`.
///
/// Files must be regular files; `contracts/` must be a directory holding at
/// least one entry.
pub fn is_present(feature_dir: &Path, artifact: Artifact) -> bool {
    let path = artifact_path(feature_dir, artifact);
    if artifact.is_dir() {
        dir_has_entries(&path)
    } else {
        path.is_file()
    }
}

/// Present artifacts, in [`Artifact::candidates`] order.
pub fn available_docs(feature_dir: &Path) -> Vec<Artifact> {
    Artifact::candidates()
        .iter()
        .copied()
        .filter(|a| is_present(feature_dir, *a))
        .collect()
}

/// Presence of every candidate, for human-readable listings.
pub fn check_all(feature_dir: &Path) -> Vec<(Artifact, bool)> {
    Artifact::candidates()
        .iter()
        .map(|a| (*a, is_present(feature_dir, *a)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), "# doc\n").unwrap();
    }

    #[test]
    fn empty_dir_reports_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(available_docs(dir.path()).is_empty());
    }

    #[test]
    fn missing_dir_reports_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(available_docs(&dir.path().join("nope")).is_empty());
    }

    #[test]
    fn order_follows_candidates_not_creation() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "quickstart.md");
        touch(dir.path(), "tasks.md");
        touch(dir.path(), "plan.md");
        assert_eq!(
            available_docs(dir.path()),
            vec![Artifact::Plan, Artifact::Tasks, Artifact::Quickstart]
        );
    }

    #[test]
    fn exactly_the_present_files() {
        let dir = TempDir::new().unwrap();
        for a in Artifact::candidates() {
            if a.is_dir() {
                std::fs::create_dir(dir.path().join(a.filename())).unwrap();
                touch(&dir.path().join(a.filename()), "api.md");
            } else {
                touch(dir.path(), a.filename());
            }
        }
        assert_eq!(available_docs(dir.path()), Artifact::candidates().to_vec());

        std::fs::remove_file(dir.path().join("research.md")).unwrap();
        let docs = available_docs(dir.path());
        assert!(!docs.contains(&Artifact::Research));
        assert_eq!(docs.len(), Artifact::candidates().len() - 1);
    }

    #[test]
    fn empty_contracts_dir_is_absent() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("contracts")).unwrap();
        assert!(!is_present(dir.path(), Artifact::Contracts));
    }

    #[test]
    fn directory_named_like_a_file_is_absent() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("plan.md")).unwrap();
        assert!(!is_present(dir.path(), Artifact::Plan));
    }

    #[test]
    fn check_all_covers_every_candidate() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "plan.md");
        let checks = check_all(dir.path());
        assert_eq!(checks.len(), Artifact::candidates().len());
        assert_eq!(checks[0], (Artifact::Plan, true));
        assert!(checks[1..].iter().all(|(_, present)| !present));
    }
}
