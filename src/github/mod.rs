//! GitHub REST client
//!
//! Thin wrapper over the two creation endpoints the synchronizers need.
//! Each call performs exactly one request; a non-success response surfaces
//! the provider's status and body without retrying.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncError};

/// Default GitHub REST API endpoint
const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client configuration, read from the environment once at startup
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// Bearer token for the API
    pub token: String,

    /// API base URL; overridable for tests and GitHub Enterprise hosts
    pub api_url: String,
}

impl GithubConfig {
    /// Build the configuration from environment variables
    ///
    /// Expects:
    /// - GH_TOKEN: bearer token (required)
    /// - GITHUB_API_URL: base URL override (optional)
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GH_TOKEN").map_err(|_| {
            SyncError::Config("GH_TOKEN environment variable not set".to_string())
        })?;

        let api_url =
            std::env::var("GITHUB_API_URL").unwrap_or_else(|_| GITHUB_API_URL.to_string());

        Ok(Self { token, api_url })
    }
}

/// GitHub API client used by both synchronizers
pub struct GithubClient {
    http: Client,
    config: GithubConfig,
}

#[derive(Serialize)]
struct NewMilestone<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    due_on: Option<&'a str>,
}

#[derive(Serialize)]
struct NewIssue<'a> {
    title: &'a str,
    labels: &'a [serde_json::Value],
    #[serde(skip_serializing_if = "Option::is_none")]
    milestone: Option<u64>,
}

#[derive(Deserialize)]
struct CreatedMilestone {
    number: u64,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SyncError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Create a milestone and return the tracker-assigned number
    pub fn create_milestone(
        &self,
        repo: &str,
        title: &str,
        description: Option<&str>,
        due_on: Option<&str>,
    ) -> Result<u64> {
        let url = format!("{}/repos/{}/milestones", self.config.api_url, repo);
        let body = NewMilestone {
            title,
            description,
            due_on,
        };

        let created: CreatedMilestone = self.post(&url, &body)?.json()?;
        Ok(created.number)
    }

    /// Create an issue, optionally attached to a milestone
    ///
    /// Milestone number 0 is still a milestone; only `None` omits the field.
    pub fn create_issue(
        &self,
        repo: &str,
        title: &str,
        labels: &[serde_json::Value],
        milestone: Option<u64>,
    ) -> Result<()> {
        let url = format!("{}/repos/{}/issues", self.config.api_url, repo);
        let body = NewIssue {
            title,
            labels,
            milestone,
        };

        self.post(&url, &body)?;
        Ok(())
    }

    fn post<T: Serialize>(&self, url: &str, body: &T) -> Result<reqwest::blocking::Response> {
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.config.token)
            .header("Accept", "application/vnd.github+json")
            .json(body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SyncError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}
