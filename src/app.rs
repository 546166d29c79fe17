//! The tag → commits → output pipeline behind the command line.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use octocrab::Octocrab;
use tracing::debug;

use crate::config::TrackerConfig;
use crate::error::VersionError;
use crate::github::{Tag, collect_commits, list_stable_tags};
use crate::output::{OutputFormat, print_output, terminal_header, to_json_pretty, write_output};
use crate::range::resolve_range;

/// Per-run choices made on the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub start_version: Option<String>,
    pub end_version: Option<String>,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub verbose: bool,
    pub list_tags: bool,
}

/// How a run ended. Every variant is a normal exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// `--list-tags` printed the tag list (possibly empty).
    TagsListed { count: usize },
    /// No stable tags could be fetched.
    NoTags,
    /// A version bound was rejected.
    InvalidRange,
    /// Collection finished but nothing matched.
    NoChanges,
    /// Records were rendered to the terminal or a file.
    Written { count: usize },
    /// Records were collected but the output file could not be written.
    WriteFailed,
}

/// Run the whole pipeline, printing operator messages to `out`.
///
/// Fetch, validation and file errors are reported on `out` and end the run
/// normally. Only a failure to write to `out` itself is returned as an error.
pub async fn run<W: Write>(
    octocrab: &Octocrab,
    config: &TrackerConfig,
    options: &RunOptions,
    out: &mut W,
) -> Result<RunStatus> {
    let tags = match list_stable_tags(octocrab, config).await {
        Ok(tags) => tags,
        Err(e) => {
            writeln!(out, "Failed to fetch tags: {}", e)?;
            Vec::new()
        }
    };
    debug!(count = tags.len(), "Stable tags available");

    if options.list_tags {
        print_tags(out, &tags, options.format)?;
        return Ok(RunStatus::TagsListed { count: tags.len() });
    }

    if tags.is_empty() {
        writeln!(out, "No tags available, exiting.")?;
        return Ok(RunStatus::NoTags);
    }

    let range = match resolve_range(
        options.start_version.as_deref(),
        options.end_version.as_deref(),
        &tags,
    ) {
        Ok(range) => range,
        Err(e @ VersionError::InvalidVersion(_)) => {
            writeln!(
                out,
                "Error: {}. Please ensure the specified versions exist in the repository tags.",
                e
            )?;
            return Ok(RunStatus::InvalidRange);
        }
        Err(e) => {
            writeln!(out, "Error: {}.", e)?;
            return Ok(RunStatus::InvalidRange);
        }
    };
    debug!(from = %range.from, to = %range.to, "Resolved version range");

    let collection = collect_commits(octocrab, config, &range.to).await;
    for (path, error) in collection.failures() {
        writeln!(out, "Failed to fetch commits for {}: {}", path, error)?;
    }
    let records = collection.into_records();

    if records.is_empty() {
        writeln!(out, "No {} related changes found.", config.label)?;
        return Ok(RunStatus::NoChanges);
    }

    match &options.output {
        Some(path) => {
            if let Err(e) = write_output(path, &records, options.format) {
                writeln!(out, "{}", e)?;
                return Ok(RunStatus::WriteFailed);
            }
        }
        None => {
            let header = terminal_header(&config.label, &range.from, &range.to);
            print_output(out, &records, options.format, options.verbose, &header)
                .context("Failed to print changes")?;
        }
    }

    Ok(RunStatus::Written {
        count: records.len(),
    })
}

fn print_tags<W: Write>(out: &mut W, tags: &[Tag], format: OutputFormat) -> Result<()> {
    if tags.is_empty() {
        writeln!(out, "No tags found.")?;
    } else if format == OutputFormat::Json {
        writeln!(out, "{}", to_json_pretty(tags)?)?;
    } else {
        for tag in tags {
            writeln!(out, "{}", tag.name)?;
        }
    }
    Ok(())
}
