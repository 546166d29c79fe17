//! Write rendered output to a file or the terminal.

use std::io::Write;
use std::path::Path;

use tempfile::Builder;
use tracing::debug;

use crate::error::OutputError;

use super::format::{CommitRecord, OutputFormat, render_file, render_terminal};

/// Write records to `path` in the given format.
///
/// The content goes to a temp file next to `path` which is then renamed over it,
/// so a failed write never leaves a truncated file behind.
pub fn write_output(
    path: &Path,
    records: &[CommitRecord],
    format: OutputFormat,
) -> Result<(), OutputError> {
    let content = render_file(records, format)?;
    write_atomic(path, &content)?;
    debug!(path = %path.display(), format = format.as_str(), count = records.len(), "Wrote output file");
    Ok(())
}

fn write_atomic(path: &Path, content: &str) -> Result<(), OutputError> {
    let failed = |source: std::io::Error| OutputError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Temp files default to 0600; a fresh output file gets the umask-derived
    // mode of a plain create, a replaced one keeps its own mode.
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut file = builder.tempfile_in(dir).map_err(failed)?;
    if let Ok(existing) = std::fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(failed)?;
    }
    file.write_all(content.as_bytes()).map_err(failed)?;
    file.persist(path).map_err(|e| failed(e.error))?;
    Ok(())
}

/// Header line shown above terminal output.
pub fn terminal_header(label: &str, from: &str, to: &str) -> String {
    format!("{} related changes from Kernel {} to {}:", label, from, to)
}

/// Print records to `out`, preceded by a blank line and the header.
pub fn print_output<W: Write>(
    out: &mut W,
    records: &[CommitRecord],
    format: OutputFormat,
    verbose: bool,
    header: &str,
) -> Result<(), OutputError> {
    let body = render_terminal(records, format, verbose)?;
    write!(out, "\n{}\n{}", header, body).map_err(OutputError::Terminal)
}
