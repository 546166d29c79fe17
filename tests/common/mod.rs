//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use cxl_tracker::TrackerConfig;
use cxl_tracker::github::build_client;
use octocrab::Octocrab;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TAGS_PATH: &str = "/repos/torvalds/linux/tags";
pub const COMMITS_PATH: &str = "/repos/torvalds/linux/commits";

/// Helper to create an unauthenticated client pointing to a mock server.
pub fn mock_client(server: &MockServer) -> Octocrab {
    build_client(&server.uri(), None).expect("Failed to build octocrab")
}

/// Helper to create a token-authenticated client pointing to a mock server.
pub fn mock_client_with_token(server: &MockServer, token: &str) -> Octocrab {
    build_client(&server.uri(), Some(token)).expect("Failed to build octocrab")
}

/// Address nothing listens on, for connection failures.
pub const CLOSED_API_URL: &str = "http://127.0.0.1:1";

/// Client whose every request fails to connect.
pub fn unreachable_client() -> Octocrab {
    build_client(CLOSED_API_URL, None).expect("Failed to build octocrab")
}

/// Default tracker configuration aimed at a mock server.
pub fn mock_config(server: &MockServer) -> TrackerConfig {
    TrackerConfig {
        api_url: server.uri(),
        ..TrackerConfig::default()
    }
}

/// A tag entry as returned by `GET /repos/{owner}/{repo}/tags`.
pub fn mock_tag(name: &str) -> Value {
    json!({
        "name": name,
        "commit": {
            "sha": format!("{:0>40}", name.len()),
            "url": format!("https://api.github.com/repos/torvalds/linux/commits/{}", name)
        },
        "zipball_url": format!("https://api.github.com/repos/torvalds/linux/zipball/refs/tags/{}", name),
        "tarball_url": format!("https://api.github.com/repos/torvalds/linux/tarball/refs/tags/{}", name),
        "node_id": format!("REF_{}", name)
    })
}

pub fn mock_tags(names: &[&str]) -> Value {
    Value::Array(names.iter().map(|n| mock_tag(n)).collect())
}

/// A commit entry as returned by `GET /repos/{owner}/{repo}/commits`.
pub fn mock_commit(sha: &str, message: &str) -> Value {
    json!({
        "sha": sha,
        "node_id": format!("C_{}", sha),
        "url": format!("https://api.github.com/repos/torvalds/linux/commits/{}", sha),
        "html_url": commit_url(sha),
        "commit": {
            "message": message,
            "author": { "name": "Dev", "email": "dev@example.com", "date": "2024-01-01T00:00:00Z" },
            "committer": { "name": "Dev", "email": "dev@example.com", "date": "2024-01-01T00:00:00Z" }
        },
        "parents": []
    })
}

pub fn commit_url(sha: &str) -> String {
    format!("https://github.com/torvalds/linux/commit/{}", sha)
}

/// GitHub-style error body.
pub fn error_body(message: &str) -> Value {
    json!({
        "message": message,
        "documentation_url": "https://docs.github.com/rest"
    })
}

/// `Link` header value pointing at `path_and_query` on the mock server.
pub fn next_link(server: &MockServer, path_and_query: &str) -> String {
    format!("<{}{}>; rel=\"next\"", server.uri(), path_and_query)
}
