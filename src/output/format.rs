//! Commit record rendering.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::OutputError;

/// One commit: its title and permalink.
///
/// Serializes as a `[title, url]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(String, String)", from = "(String, String)")]
pub struct CommitRecord {
    pub title: String,
    pub url: String,
}

impl CommitRecord {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// `- [title](url)`
    pub fn to_markdown(&self) -> String {
        format!("- [{}]({})", self.title, self.url)
    }
}

impl From<CommitRecord> for (String, String) {
    fn from(record: CommitRecord) -> Self {
        (record.title, record.url)
    }
}

impl From<(String, String)> for CommitRecord {
    fn from((title, url): (String, String)) -> Self {
        Self { title, url }
    }
}

/// Selectable output formats. No selection means [`OutputFormat::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Txt,
    Md,
    Json,
    #[default]
    Default,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Md => "md",
            Self::Json => "json",
            Self::Default => "default",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" => Ok(Self::Txt),
            "md" => Ok(Self::Md),
            "json" => Ok(Self::Json),
            "default" => Ok(Self::Default),
            _ => Err(format!("Unknown format: {} (expected txt, md or json)", s)),
        }
    }
}

/// Serialize with 4-space indentation.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, OutputError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser).map_err(OutputError::Serialize)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn titles(records: &[CommitRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.title);
        out.push('\n');
    }
    out
}

fn markdown(records: &[CommitRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_markdown());
        out.push('\n');
    }
    out
}

/// Content written to an output file.
///
/// The default format writes titles only, same as `txt`.
pub fn render_file(records: &[CommitRecord], format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Txt | OutputFormat::Default => Ok(titles(records)),
        OutputFormat::Md => Ok(markdown(records)),
        OutputFormat::Json => to_json_pretty(records),
    }
}

/// Body printed to the terminal (without the header line).
///
/// `txt` has no terminal form of its own and renders like the default.
pub fn render_terminal(
    records: &[CommitRecord],
    format: OutputFormat,
    verbose: bool,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Md => Ok(markdown(records)),
        OutputFormat::Json => to_json_pretty(records).map(|json| json + "\n"),
        OutputFormat::Txt | OutputFormat::Default if verbose => {
            let mut out = String::new();
            for record in records {
                out.push_str(&format!("- {} ({})\n", record.title, record.url));
            }
            Ok(out)
        }
        OutputFormat::Txt | OutputFormat::Default => {
            let block: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
            Ok(format!("- {}\n", block.join("\n- ")))
        }
    }
}
