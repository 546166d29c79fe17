//! Error types for cxl-tracker modules using thiserror.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Errors from GitHub API operations.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Failed to build GitHub client: {0}")]
    ClientBuild(#[source] Box<octocrab::Error>),

    #[error("{status} {reason}{}", detail(message))]
    Api {
        status: u16,
        reason: String,
        message: String,
    },

    #[error(
        "Rate limited by GitHub API ({status}): {message}. Pass --ghtoken or set GITHUB_TOKEN to raise the limit"
    )]
    RateLimited { status: u16, message: String },

    #[error("Request to GitHub failed: {0}")]
    Transport(#[source] Box<octocrab::Error>),

    #[error("Invalid repository '{0}', expected <owner>/<name>")]
    InvalidRepository(String),
}

impl GitHubError {
    /// Classify a non-success response.
    ///
    /// `body` is used for the message when it is GitHub's JSON error shape;
    /// anything else (an HTML proxy page) leaves the message empty.
    pub fn from_status(status: u16, reason: &str, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_default();
        Self::api(status, reason, message)
    }

    fn api(status: u16, reason: &str, message: String) -> Self {
        if matches!(status, 403 | 429) && message.to_lowercase().contains("rate limit") {
            return GitHubError::RateLimited { status, message };
        }

        GitHubError::Api {
            status,
            reason: reason.to_string(),
            message,
        }
    }
}

fn detail(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {}", message)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl From<octocrab::Error> for GitHubError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => Self::api(
                source.status_code.as_u16(),
                source.status_code.canonical_reason().unwrap_or("Unknown"),
                source.message.clone(),
            ),
            other => GitHubError::Transport(Box::new(other)),
        }
    }
}

/// Errors from version range resolution.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version '{0}'")]
    InvalidVersion(String),

    #[error("At least two stable tags are needed to pick a default range, found {found}")]
    NotEnoughTags { found: usize },
}

/// Errors from output rendering and writing.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Error writing to file {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to terminal: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_reads_github_json_message() {
        let err = GitHubError::from_status(404, "Not Found", r#"{"message":"Not Found"}"#);
        assert_eq!(err.to_string(), "404 Not Found: Not Found");
    }

    #[test]
    fn test_from_status_keeps_status_for_html_body() {
        let err = GitHubError::from_status(502, "Bad Gateway", "<html>Bad Gateway</html>");
        assert!(matches!(err, GitHubError::Api { status: 502, ref message, .. } if message.is_empty()));
        assert_eq!(err.to_string(), "502 Bad Gateway");
    }

    #[test]
    fn test_from_status_detects_rate_limit() {
        let err = GitHubError::from_status(
            403,
            "Forbidden",
            r#"{"message":"API rate limit exceeded for 127.0.0.1."}"#,
        );
        assert!(matches!(err, GitHubError::RateLimited { status: 403, .. }));
    }
}
