//! Output rendering and writing.

pub mod format;
pub mod writer;

pub use format::{CommitRecord, OutputFormat, render_file, render_terminal, to_json_pretty};
pub use writer::{print_output, terminal_header, write_output};
