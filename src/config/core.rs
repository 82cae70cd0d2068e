use serde::{Deserialize, Serialize};

use super::display::{DisplayConfig, OutputConfig};
use crate::chart::ChartLayout;
use crate::io::output::OutputFormat;

/// Root configuration structure for scanlens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanlensConfig {
    /// Table and chart display constraints
    #[serde(default)]
    pub display: Option<DisplayConfig>,

    /// Drawing-surface geometry for each chart
    #[serde(default)]
    pub chart: Option<ChartLayout>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl ScanlensConfig {
    pub fn display(&self) -> DisplayConfig {
        self.display.unwrap_or_default()
    }

    pub fn chart(&self) -> ChartLayout {
        self.chart.unwrap_or_default()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.map(|o| o.format).unwrap_or_default()
    }

    /// Fully populated config, as written by `scanlens init`.
    pub fn with_all_defaults() -> Self {
        Self {
            display: Some(DisplayConfig::default()),
            chart: Some(ChartLayout::default()),
            output: Some(OutputConfig::default()),
        }
    }
}
