//! Run configuration: which repository, paths and keyword to track.

use crate::error::GitHubError;

/// Default GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repository tracked when `--repo` is not given.
pub const DEFAULT_REPOSITORY: &str = "torvalds/linux";

/// Subdirectories tracked when no `--path` is given.
pub const DEFAULT_PATHS: [&str; 2] = ["drivers/cxl", "drivers/dax"];

/// Feature label used in terminal headers.
pub const DEFAULT_LABEL: &str = "CXL";

/// Page size requested from list endpoints (GitHub's maximum).
pub const PER_PAGE: u8 = 100;

/// Everything the tag lister and commit collector need to know about a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub api_url: String,
    pub owner: String,
    pub repo: String,
    pub paths: Vec<String>,
    /// Case-insensitive keyword a commit message must contain, if any.
    pub keyword: Option<String>,
    pub label: String,
    pub per_page: u8,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            owner: "torvalds".to_string(),
            repo: "linux".to_string(),
            paths: DEFAULT_PATHS.iter().map(|p| p.to_string()).collect(),
            keyword: None,
            label: DEFAULT_LABEL.to_string(),
            per_page: PER_PAGE,
        }
    }
}

impl TrackerConfig {
    /// Replace owner and repo from an `owner/name` string.
    pub fn with_repository(mut self, full_name: &str) -> Result<Self, GitHubError> {
        let (owner, repo) = parse_repository(full_name)?;
        self.owner = owner;
        self.repo = repo;
        Ok(self)
    }

    /// Replace tracked paths; an empty list keeps the defaults.
    pub fn with_paths(mut self, paths: Vec<String>) -> Self {
        if !paths.is_empty() {
            self.paths = paths;
        }
        self
    }

    /// Set the keyword filter. Blank keywords disable filtering.
    pub fn with_keyword(mut self, keyword: Option<String>) -> Self {
        self.keyword = keyword.filter(|k| !k.trim().is_empty());
        self
    }
}

/// Split `owner/name` into its parts.
pub fn parse_repository(full_name: &str) -> Result<(String, String), GitHubError> {
    let full_name = full_name.trim().trim_end_matches('/');
    match full_name.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(GitHubError::InvalidRepository(full_name.to_string())),
    }
}
