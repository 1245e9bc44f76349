use crate::config::MilestoneConfig;
use crate::error::Result;
use crate::github::GithubClient;

/// Totals from a milestone sync pass
#[derive(Debug, Default)]
pub struct MilestoneSummary {
    pub milestones: usize,
    pub issues: usize,
}

/// Replays milestone definitions against the tracker, repository by repository
pub struct MilestoneSynchronizer<'a> {
    client: &'a GithubClient,
}

impl<'a> MilestoneSynchronizer<'a> {
    pub fn new(client: &'a GithubClient) -> Self {
        Self { client }
    }

    /// Create every declared milestone, then its issues, in declared order
    ///
    /// Each issue carries the milestone number the tracker assigned to its
    /// parent. The first failed call aborts the pass; anything already
    /// created stays in place.
    pub fn sync(&self, configs: &[MilestoneConfig]) -> Result<MilestoneSummary> {
        let mut summary = MilestoneSummary::default();

        for config in configs {
            println!("Syncing milestones for {}", config.repo);

            for milestone in &config.milestones {
                let number = self.client.create_milestone(
                    &config.repo,
                    &milestone.title,
                    milestone.description.as_deref(),
                    milestone.due_on.as_deref(),
                )?;
                summary.milestones += 1;

                for issue in &milestone.issues {
                    self.client
                        .create_issue(&config.repo, &issue.title, &issue.labels, Some(number))?;
                    summary.issues += 1;
                }
            }
        }

        Ok(summary)
    }
}
