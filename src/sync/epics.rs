use crate::config::EpicsConfig;
use crate::error::Result;
use crate::github::GithubClient;

/// Totals from an epic sync pass
#[derive(Debug, Default)]
pub struct EpicSummary {
    pub issues: usize,
}

/// Fans each epic out into one labeled issue per target repository
pub struct EpicSynchronizer<'a> {
    client: &'a GithubClient,
}

impl<'a> EpicSynchronizer<'a> {
    pub fn new(client: &'a GithubClient) -> Self {
        Self { client }
    }

    /// Create the epic issues in declared order, never attached to a milestone
    pub fn sync(&self, config: &EpicsConfig) -> Result<EpicSummary> {
        let mut summary = EpicSummary::default();

        for epic in &config.epics {
            println!("Syncing epic '{}'", epic.title);

            let title = epic_title(&epic.title);
            for repo in &epic.repos {
                self.client.create_issue(repo, &title, &epic.labels, None)?;
                summary.issues += 1;
            }
        }

        Ok(summary)
    }
}

/// Issue title for an epic
fn epic_title(title: &str) -> String {
    format!("[EPIC] {}", title)
}
