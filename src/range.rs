//! Version range resolution against the stable tag list.

use crate::error::VersionError;
use crate::github::Tag;

/// Resolved pair of stable tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    pub from: String,
    pub to: String,
}

/// Prefix a `v` if missing.
pub fn normalize_version(version: &str) -> String {
    if version.starts_with('v') {
        version.to_string()
    } else {
        format!("v{}", version)
    }
}

/// Normalize a user-supplied version and check it is a known stable tag.
pub fn validate_version(version: &str, tags: &[Tag]) -> Result<String, VersionError> {
    let version = normalize_version(version);
    if tags.iter().any(|t| t.name == version) {
        Ok(version)
    } else {
        Err(VersionError::InvalidVersion(version))
    }
}

/// Resolve the range to report on.
///
/// Supplied bounds are validated first. If either bound is missing, both
/// default to the last two entries of `tags`.
pub fn resolve_range(
    from: Option<&str>,
    to: Option<&str>,
    tags: &[Tag],
) -> Result<VersionRange, VersionError> {
    let from = from.map(|v| validate_version(v, tags)).transpose()?;
    let to = to.map(|v| validate_version(v, tags)).transpose()?;

    match (from, to) {
        (Some(from), Some(to)) => Ok(VersionRange { from, to }),
        _ => match tags {
            [.., previous, latest] => Ok(VersionRange {
                from: previous.name.clone(),
                to: latest.name.clone(),
            }),
            _ => Err(VersionError::NotEnoughTags { found: tags.len() }),
        },
    }
}
