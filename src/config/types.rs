use serde::Deserialize;

/// Milestone definitions for one target repository.
///
/// One of these is loaded per file in the milestones directory; the
/// repository identifier is the file name with the extension stripped.
#[derive(Debug, Clone)]
pub struct MilestoneConfig {
    /// Target repository identifier (`owner/name`)
    pub repo: String,

    /// Milestones to create, in declared order
    pub milestones: Vec<MilestoneSpec>,
}

/// A single milestone and the issues filed under it
#[derive(Debug, Clone)]
pub struct MilestoneSpec {
    pub title: String,

    pub description: Option<String>,

    /// Due date string, forwarded to the tracker without local parsing
    pub due_on: Option<String>,

    /// Issues to attach to this milestone, in declared order
    pub issues: Vec<IssueSpec>,
}

/// An issue declared under a milestone
#[derive(Debug, Clone, Deserialize)]
pub struct IssueSpec {
    pub title: String,

    /// Label values, forwarded to the tracker verbatim; the provider
    /// validates their shape, not us
    #[serde(default)]
    pub labels: Vec<serde_json::Value>,
}

/// The epics definition file
#[derive(Debug, Clone)]
pub struct EpicsConfig {
    /// Epics to fan out, in declared order
    pub epics: Vec<EpicSpec>,
}

/// A cross-repository epic: one issue is created per listed repository
#[derive(Debug, Clone)]
pub struct EpicSpec {
    pub title: String,

    /// Label values, forwarded to the tracker verbatim
    pub labels: Vec<serde_json::Value>,

    /// Target repositories (`owner/name`), in declared order
    pub repos: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_spec_labels_default_empty() {
        let issue: IssueSpec = serde_yaml::from_str("title: Fix login").unwrap();
        assert_eq!(issue.title, "Fix login");
        assert!(issue.labels.is_empty());
    }

    #[test]
    fn test_issue_spec_labels_pass_through() {
        // Non-string labels survive loading; the API layer surfaces the
        // provider's own validation error.
        let issue: IssueSpec = serde_yaml::from_str("title: T\nlabels: [bug, 7]").unwrap();
        assert_eq!(issue.labels[0], serde_json::json!("bug"));
        assert_eq!(issue.labels[1], serde_json::json!(7));
    }
}
