//! Configuration module
//!
//! Loads the per-repository milestone definition files and the epics file.
//! Only the presence of the required keys (milestones/epics/issues/repos) is
//! validated here; everything else is handed to the API layer untouched.

mod types;

pub use types::{EpicSpec, EpicsConfig, IssueSpec, MilestoneConfig, MilestoneSpec};

use serde::Deserialize;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Result, SyncError};

#[derive(Deserialize)]
struct MilestoneFile {
    milestones: Option<Vec<RawMilestone>>,
}

// Required keys are Options here so their absence maps to MissingKey
// instead of a generic parse failure.
#[derive(Deserialize)]
struct RawMilestone {
    title: String,
    description: Option<String>,
    due_on: Option<String>,
    issues: Option<Vec<IssueSpec>>,
}

#[derive(Deserialize)]
struct EpicsFile {
    epics: Option<Vec<RawEpic>>,
}

#[derive(Deserialize)]
struct RawEpic {
    title: String,
    #[serde(default)]
    labels: Vec<serde_json::Value>,
    repos: Option<Vec<String>>,
}

/// Load one MilestoneConfig per definition file in `dir`
///
/// Files are matched by extension (`.yml` or `.yaml`), one directory level
/// deep, and processed in file-name order so runs are reproducible.
pub fn load_milestones(dir: &Path) -> Result<Vec<MilestoneConfig>> {
    if !dir.is_dir() {
        return Err(SyncError::Config(format!(
            "Milestones directory does not exist: {}",
            dir.display()
        )));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if !is_definition_file(path) {
            continue;
        }

        paths.push(path.to_path_buf());
    }

    paths.sort();

    let mut configs = Vec::new();
    for path in paths {
        configs.push(load_milestone_file(&path)?);
    }

    Ok(configs)
}

/// Load the epics definition file
pub fn load_epics(path: &Path) -> Result<EpicsConfig> {
    let file: EpicsFile = parse_file(path)?;

    let raw = file.epics.ok_or_else(|| missing("epics", path))?;

    let mut epics = Vec::with_capacity(raw.len());
    for epic in raw {
        let repos = epic.repos.ok_or_else(|| missing("repos", path))?;
        epics.push(EpicSpec {
            title: epic.title,
            labels: epic.labels,
            repos,
        });
    }

    Ok(EpicsConfig { epics })
}

fn load_milestone_file(path: &Path) -> Result<MilestoneConfig> {
    let repo = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file: MilestoneFile = parse_file(path)?;

    let raw = file.milestones.ok_or_else(|| missing("milestones", path))?;

    let mut milestones = Vec::with_capacity(raw.len());
    for milestone in raw {
        let issues = milestone.issues.ok_or_else(|| missing("issues", path))?;
        milestones.push(MilestoneSpec {
            title: milestone.title,
            description: milestone.description,
            due_on: milestone.due_on,
            issues,
        });
    }

    Ok(MilestoneConfig { repo, milestones })
}

fn parse_file<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        SyncError::Config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    serde_yaml::from_str(&content).map_err(|source| SyncError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn is_definition_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

fn missing(key: &'static str, path: &Path) -> SyncError {
    SyncError::MissingKey {
        key,
        path: path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ACME_YAML: &str = r#"
milestones:
  - title: "v1.0"
    description: "First stable release"
    due_on: "2026-03-01T00:00:00Z"
    issues:
      - title: "Ship installer"
        labels: ["release"]
      - title: "Write changelog"
"#;

    #[test]
    fn test_load_milestones_single_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("acme-widgets.yml"), ACME_YAML).unwrap();

        let configs = load_milestones(temp.path()).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].repo, "acme-widgets");

        let milestone = &configs[0].milestones[0];
        assert_eq!(milestone.title, "v1.0");
        assert_eq!(milestone.description.as_deref(), Some("First stable release"));
        assert_eq!(milestone.due_on.as_deref(), Some("2026-03-01T00:00:00Z"));
        assert_eq!(milestone.issues.len(), 2);
        assert_eq!(milestone.issues[1].title, "Write changelog");
        assert!(milestone.issues[1].labels.is_empty());
    }

    #[test]
    fn test_load_milestones_sorted_by_file_name() {
        let temp = TempDir::new().unwrap();
        // Written in reverse order; loading must not depend on listing order.
        fs::write(temp.path().join("zeta.yml"), "milestones: []").unwrap();
        fs::write(temp.path().join("acme.yml"), "milestones: []").unwrap();

        let configs = load_milestones(temp.path()).unwrap();
        let repos: Vec<&str> = configs.iter().map(|c| c.repo.as_str()).collect();
        assert_eq!(repos, vec!["acme", "zeta"]);
    }

    #[test]
    fn test_load_milestones_filters_extensions() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("one.yml"), "milestones: []").unwrap();
        fs::write(temp.path().join("two.yaml"), "milestones: []").unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();
        fs::write(temp.path().join("README.md"), "ignored").unwrap();

        let configs = load_milestones(temp.path()).unwrap();
        assert_eq!(configs.len(), 2);
    }

    #[test]
    fn test_load_milestones_ignores_subdirectories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("top.yml"), "milestones: []").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/deep.yml"), "milestones: []").unwrap();

        let configs = load_milestones(temp.path()).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].repo, "top");
    }

    #[test]
    fn test_load_milestones_empty_dir() {
        let temp = TempDir::new().unwrap();
        let configs = load_milestones(temp.path()).unwrap();
        assert!(configs.is_empty());
    }

    #[test]
    fn test_load_milestones_missing_dir() {
        let result = load_milestones(Path::new("/nonexistent/milestones"));
        assert!(matches!(result, Err(SyncError::Config(_))));
    }

    #[test]
    fn test_load_milestones_missing_milestones_key() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("acme.yml"), "something_else: []").unwrap();

        let err = load_milestones(temp.path()).unwrap_err();
        assert!(matches!(
            err,
            SyncError::MissingKey {
                key: "milestones",
                ..
            }
        ));
    }

    #[test]
    fn test_load_milestones_missing_issues_key() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("acme.yml"),
            "milestones:\n  - title: v1\n    description: d\n",
        )
        .unwrap();

        let err = load_milestones(temp.path()).unwrap_err();
        assert!(matches!(err, SyncError::MissingKey { key: "issues", .. }));
    }

    #[test]
    fn test_load_milestones_invalid_yaml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bad.yml"), "milestones: [unclosed").unwrap();

        let err = load_milestones(temp.path()).unwrap_err();
        assert!(matches!(err, SyncError::Parse { .. }));
    }

    #[test]
    fn test_load_epics() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("epics.yml");
        fs::write(
            &path,
            r#"
epics:
  - title: "Unified search"
    labels: ["epic"]
    repos:
      - "acme/frontend"
      - "acme/backend"
"#,
        )
        .unwrap();

        let config = load_epics(&path).unwrap();
        assert_eq!(config.epics.len(), 1);
        assert_eq!(config.epics[0].title, "Unified search");
        assert_eq!(config.epics[0].labels, vec![serde_json::json!("epic")]);
        assert_eq!(config.epics[0].repos, vec!["acme/frontend", "acme/backend"]);
    }

    #[test]
    fn test_load_epics_missing_epics_key() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("epics.yml");
        fs::write(&path, "milestones: []").unwrap();

        let err = load_epics(&path).unwrap_err();
        assert!(matches!(err, SyncError::MissingKey { key: "epics", .. }));
    }

    #[test]
    fn test_load_epics_missing_repos_key() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("epics.yml");
        fs::write(&path, "epics:\n  - title: Lone epic\n").unwrap();

        let err = load_epics(&path).unwrap_err();
        assert!(matches!(err, SyncError::MissingKey { key: "repos", .. }));
    }

    #[test]
    fn test_load_epics_missing_file() {
        let result = load_epics(Path::new("/nonexistent/epics.yml"));
        assert!(matches!(result, Err(SyncError::Config(_))));
    }
}
