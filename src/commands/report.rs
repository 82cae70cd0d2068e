use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::{self, ScanlensConfig};
use crate::dashboard::{derive_dashboard, Settings};
use crate::io::output::{create_writer, OutputFormat, ReportSection};
use crate::io::snapshot::load_snapshot;

pub struct ReportConfig {
    pub snapshot: PathBuf,
    pub page: usize,
    pub section: ReportSection,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_report(config: ReportConfig) -> Result<()> {
    let settings_source = resolve_config(config.config.as_ref())?;
    let settings = Settings::from(&settings_source);
    let format = config.format.unwrap_or_else(|| settings_source.output_format());

    let snapshot = load_snapshot(&config.snapshot)?;
    let report = derive_dashboard(&snapshot, config.page, &settings);
    tracing::info!(
        project_id = report.project_id,
        page = report.modules.page,
        modules = report.modules.total_items,
        "derived dashboard"
    );

    if config.plain || config.output.is_some() {
        colored::control::set_override(false);
    }

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    let mut writer = create_writer(format, sink);
    writer.write_report(&report, config.section)?;
    writer.finish()?;
    Ok(())
}

fn resolve_config(path: Option<&PathBuf>) -> Result<ScanlensConfig> {
    match path {
        Some(path) => Ok(config::load_config_file(path)?),
        None => Ok(config::load_config()),
    }
}
