use std::path::PathBuf;
use thiserror::Error;

/// Project-sync error types
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot parse '{}': {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Missing required key '{}' in '{}'", .key, .path.display())]
    MissingKey { key: &'static str, path: PathBuf },

    #[error("GitHub API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for project-sync operations
pub type Result<T> = std::result::Result<T, SyncError>;
