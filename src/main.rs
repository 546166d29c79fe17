//! cxl-tracker - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cxl_tracker::config::{DEFAULT_API_URL, DEFAULT_LABEL, DEFAULT_REPOSITORY};
use cxl_tracker::github::{build_client, resolve_token};
use cxl_tracker::{OutputFormat, RunOptions, TrackerConfig, run};

/// Track CXL feature changes in the Linux kernel.
#[derive(Parser, Debug)]
#[command(name = "cxl-tracker")]
#[command(about = "Track CXL feature changes in the Linux kernel")]
#[command(version)]
struct Cli {
    /// GitHub API token for authenticated requests (falls back to GITHUB_TOKEN, GH_TOKEN)
    #[arg(long)]
    ghtoken: Option<String>,

    /// Starting kernel version
    #[arg(long)]
    start_version: Option<String>,

    /// Ending kernel version
    #[arg(long)]
    end_version: Option<String>,

    /// Output file name (prints to the terminal when omitted); without --format the file gets one title per line
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_parser = ["txt", "md", "json"])]
    format: Option<String>,

    /// Show commit URLs next to titles in terminal output
    #[arg(long)]
    verbose: bool,

    /// List all stable tags from the repository and exit
    #[arg(long)]
    list_tags: bool,

    /// Only keep commits whose message contains this keyword (case-insensitive)
    #[arg(long)]
    grep: Option<String>,

    /// Repository to query, as <owner>/<name>
    #[arg(long, default_value = DEFAULT_REPOSITORY)]
    repo: String,

    /// Path to track; repeat for several (default: drivers/cxl and drivers/dax)
    #[arg(long = "path")]
    paths: Vec<String>,

    /// Feature name used in output headers
    #[arg(long, default_value = DEFAULT_LABEL)]
    label: String,

    /// GitHub API base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.format.as_deref() {
        Some(f) => f.parse::<OutputFormat>().map_err(anyhow::Error::msg)?,
        None => OutputFormat::Default,
    };

    let mut config = TrackerConfig::default()
        .with_repository(&cli.repo)
        .context("Invalid --repo")?
        .with_paths(cli.paths)
        .with_keyword(cli.grep);
    config.label = cli.label;
    config.api_url = cli.api_url;

    let token = resolve_token(cli.ghtoken);
    let octocrab = build_client(&config.api_url, token.as_deref())
        .context("Failed to set up GitHub client")?;

    let options = RunOptions {
        start_version: cli.start_version,
        end_version: cli.end_version,
        output: cli.output,
        format,
        verbose: cli.verbose,
        list_tags: cli.list_tags,
    };

    let mut stdout = std::io::stdout();

    tokio::select! {
        result = run(&octocrab, &config, &options, &mut stdout) => {
            result?;
        }
        Ok(()) = tokio::signal::ctrl_c() => {
            println!("Process interrupted by user.");
            std::process::exit(1);
        }
    }

    Ok(())
}
