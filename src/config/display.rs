use serde::{Deserialize, Serialize};

use crate::io::output::OutputFormat;
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::ranking::DEFAULT_TOP_MODULES;

/// Display constraints for tables and charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rows per page in module tables (default: 7)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Modules shown in the risk bar chart (default: 6)
    #[serde(default = "default_top_modules")]
    pub top_modules: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            top_modules: default_top_modules(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_top_modules() -> usize {
    DEFAULT_TOP_MODULES
}

/// Output configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}
