//! Release tag enumeration.

use octocrab::{Octocrab, Page};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::client::{fetch_next, fetch_page, route_with_query};
use crate::config::TrackerConfig;
use crate::error::GitHubError;

/// A release tag name such as `v6.7` or `v6.7-rc1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Release candidates carry an `-rc` marker.
    pub fn is_stable(&self) -> bool {
        !self.name.contains("-rc")
    }

    /// Name with a single leading `v` stripped.
    pub fn sort_key(&self) -> &str {
        self.name.strip_prefix('v').unwrap_or(&self.name)
    }
}

/// Only the name of each tag entry is needed.
#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
}

/// Drop release candidates and sort by [`Tag::sort_key`].
///
/// Ordering is plain string comparison, so `6.10` sorts before `6.2`.
pub fn stable_sorted(tags: impl IntoIterator<Item = Tag>) -> Vec<Tag> {
    let mut stable: Vec<Tag> = tags.into_iter().filter(Tag::is_stable).collect();
    stable.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    stable
}

/// Fetch every tag of the configured repository and return the stable ones, sorted.
///
/// Any failed page aborts the whole listing.
pub async fn list_stable_tags(
    octocrab: &Octocrab,
    config: &TrackerConfig,
) -> Result<Vec<Tag>, GitHubError> {
    let per_page = config.per_page.to_string();
    let route = route_with_query(
        &format!("/repos/{}/{}/tags", config.owner, config.repo),
        &[("per_page", per_page.as_str())],
    );

    let mut page: Page<TagEntry> = fetch_page(octocrab, route).await?;
    let mut names = Vec::new();
    let mut pages = 1u32;

    loop {
        names.extend(page.take_items().into_iter().map(|t| Tag::new(t.name)));

        match fetch_next(octocrab, &page).await? {
            Some(next) => {
                page = next;
                pages += 1;
            }
            None => break,
        }
    }

    debug!(
        pages,
        total = names.len(),
        "Fetched tags for {}/{}",
        config.owner,
        config.repo
    );

    Ok(stable_sorted(names))
}
