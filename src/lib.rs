//! cxl-tracker - list CXL related Linux kernel commits between release tags.
//!
//! # Overview
//!
//! cxl-tracker pages through the GitHub tags of a repository, picks a range of
//! stable release tags, collects the commit history of a few tracked paths up to
//! the end of that range, and renders the commits as text, Markdown or JSON.

pub mod app;
pub mod config;
pub mod error;
pub mod github;
pub mod output;
pub mod range;

// Re-export commonly used types
pub use app::{RunOptions, RunStatus, run};
pub use config::TrackerConfig;
pub use error::{GitHubError, OutputError, VersionError};
pub use github::{CommitCollection, PathOutcome, Tag};
pub use output::{CommitRecord, OutputFormat};
pub use range::VersionRange;
