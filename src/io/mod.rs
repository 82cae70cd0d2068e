pub mod output;
pub mod snapshot;

pub use output::{
    create_writer, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter, ReportSection,
    TerminalWriter,
};
pub use snapshot::{load_snapshot, parse_snapshot};

use std::fs;
use std::path::Path;

use crate::core::{Error, Result};

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_system("Failed to write file", path, e))
}
