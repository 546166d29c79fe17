//! GitHub token resolution.
//!
//! Lookup order:
//! 1. `--ghtoken` on the command line
//! 2. GITHUB_TOKEN env var
//! 3. GH_TOKEN env var
//!
//! No token is fine: requests are then sent unauthenticated.

use std::env;

/// Pick the token to send, if any. Empty values count as absent.
pub fn resolve_token(cli_token: Option<String>) -> Option<String> {
    if let Some(token) = cli_token.filter(|t| !t.is_empty()) {
        return Some(token);
    }

    ["GITHUB_TOKEN", "GH_TOKEN"]
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|token| !token.is_empty())
}
