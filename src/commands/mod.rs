//! CLI command implementations for scanlens.
//!
//! - **report**: Render the dashboard for an exported project snapshot
//! - **init**: Initialize a new scanlens configuration file

pub mod init;
pub mod report;

pub use init::init_config;
pub use report::{handle_report, ReportConfig};
