//! Project snapshots exported from the scan analytics API.

use std::fs;
use std::path::Path;

use crate::core::{Error, ProjectSnapshot, Result, ResultExt};

pub fn load_snapshot(path: &Path) -> Result<ProjectSnapshot> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read snapshot", path, e))?;
    let snapshot =
        parse_snapshot(&contents).context(format!("Invalid snapshot {}", path.display()))?;
    log::debug!(
        "Loaded snapshot for project {} ({} modules, {} QA entries) from {}",
        snapshot.project_id,
        snapshot.module_metrics.len(),
        snapshot.qa_entries.len(),
        path.display()
    );
    Ok(snapshot)
}

pub fn parse_snapshot(contents: &str) -> Result<ProjectSnapshot> {
    Ok(serde_json::from_str(contents)?)
}
