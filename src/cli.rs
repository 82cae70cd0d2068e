use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::{OutputFormat, ReportSection};

#[derive(Parser, Debug)]
#[command(name = "scanlens")]
#[command(about = "Risk and quality dashboard for code-scan snapshots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the dashboard for an exported project snapshot
    Report {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Page of the module ranking to show
        #[arg(long, default_value = "1")]
        page: usize,

        /// Part of the dashboard to write
        #[arg(long, value_enum, default_value = "all")]
        section: ReportSection,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .scanlens.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Disable colored terminal output
        #[arg(long)]
        plain: bool,
    },

    /// Initialize a scanlens configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
