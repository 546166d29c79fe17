//! Per-path commit history collection.

use octocrab::{Octocrab, Page};
use serde::Deserialize;
use tracing::{debug, warn};

use super::client::{fetch_next, fetch_page, route_with_query};
use crate::config::TrackerConfig;
use crate::error::GitHubError;
use crate::output::CommitRecord;

/// Entry of the commit listing. Entries without a nested `commit` are skipped.
#[derive(Debug, Deserialize)]
struct CommitEntry {
    #[serde(default)]
    commit: Option<CommitDetail>,
    #[serde(default)]
    html_url: String,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    #[serde(default)]
    message: String,
}

/// Result of collecting one path's history.
#[derive(Debug)]
pub enum PathOutcome {
    /// Every page was fetched.
    Complete(Vec<CommitRecord>),
    /// Some pages were fetched before a page failed.
    Partial {
        records: Vec<CommitRecord>,
        error: GitHubError,
    },
    /// The first page failed.
    Failed(GitHubError),
}

impl PathOutcome {
    pub fn records(&self) -> &[CommitRecord] {
        match self {
            Self::Complete(records) | Self::Partial { records, .. } => records,
            Self::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&GitHubError> {
        match self {
            Self::Complete(_) => None,
            Self::Partial { error, .. } | Self::Failed(error) => Some(error),
        }
    }

    fn into_records(self) -> Vec<CommitRecord> {
        match self {
            Self::Complete(records) | Self::Partial { records, .. } => records,
            Self::Failed(_) => Vec::new(),
        }
    }
}

/// Outcomes for every tracked path, in path order.
#[derive(Debug, Default)]
pub struct CommitCollection {
    pub paths: Vec<(String, PathOutcome)>,
}

impl CommitCollection {
    /// Paths whose collection stopped early, with the reason.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &GitHubError)> {
        self.paths
            .iter()
            .filter_map(|(path, outcome)| outcome.error().map(|e| (path.as_str(), e)))
    }

    /// All kept records, path by path.
    pub fn into_records(self) -> Vec<CommitRecord> {
        self.paths
            .into_iter()
            .flat_map(|(_, outcome)| outcome.into_records())
            .collect()
    }
}

/// First line of a commit message.
pub fn commit_title(message: &str) -> &str {
    message.split('\n').next().unwrap_or_default()
}

/// Case-insensitive substring match. No keyword matches everything.
pub fn matches_keyword(message: &str, keyword: Option<&str>) -> bool {
    match keyword {
        Some(keyword) => message.to_lowercase().contains(&keyword.to_lowercase()),
        None => true,
    }
}

fn records_from_page(entries: Vec<CommitEntry>, keyword: Option<&str>) -> Vec<CommitRecord> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let detail = entry.commit?;
            if !matches_keyword(&detail.message, keyword) {
                return None;
            }
            Some(CommitRecord::new(commit_title(&detail.message), entry.html_url))
        })
        .collect()
}

/// Collect history of every configured path, starting at `to_ref`.
///
/// A failure only stops the path it happened on; later paths are still fetched.
pub async fn collect_commits(
    octocrab: &Octocrab,
    config: &TrackerConfig,
    to_ref: &str,
) -> CommitCollection {
    let mut collection = CommitCollection::default();

    for path in &config.paths {
        let outcome = collect_path(octocrab, config, to_ref, path).await;
        if let Some(error) = outcome.error() {
            warn!(path = %path, error = %error, "Commit collection stopped early");
        }
        collection.paths.push((path.clone(), outcome));
    }

    collection
}

/// Collect the history of a single path, following pagination.
pub async fn collect_path(
    octocrab: &Octocrab,
    config: &TrackerConfig,
    to_ref: &str,
    path: &str,
) -> PathOutcome {
    let per_page = config.per_page.to_string();
    let route = route_with_query(
        &format!("/repos/{}/{}/commits", config.owner, config.repo),
        &[("sha", to_ref), ("path", path), ("per_page", per_page.as_str())],
    );
    let keyword = config.keyword.as_deref();

    let mut page: Page<CommitEntry> = match fetch_page(octocrab, route).await {
        Ok(page) => page,
        Err(error) => return PathOutcome::Failed(error),
    };
    let mut records = Vec::new();
    let mut pages = 1u32;

    loop {
        records.extend(records_from_page(page.take_items(), keyword));

        match fetch_next(octocrab, &page).await {
            Ok(Some(next)) => {
                page = next;
                pages += 1;
            }
            Ok(None) => break,
            Err(error) => return PathOutcome::Partial { records, error },
        }
    }

    debug!(path, pages, kept = records.len(), "Collected commits");

    PathOutcome::Complete(records)
}
