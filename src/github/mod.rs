//! GitHub API operations using octocrab.

pub mod auth;
pub mod client;
pub mod commits;
pub mod tags;

pub use auth::resolve_token;
pub use client::{build_client, fetch_next, fetch_page, route_with_query};
pub use commits::{CommitCollection, PathOutcome, collect_commits, collect_path};
pub use tags::{Tag, list_stable_tags, stable_sorted};
