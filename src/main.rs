use anyhow::Result;
use clap::Parser;
use scanlens::cli::{Cli, Commands};
use scanlens::commands::{self, ReportConfig};
use scanlens::observability::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Report {
            snapshot,
            page,
            section,
            format,
            output,
            config,
            plain,
        } => commands::handle_report(ReportConfig {
            snapshot,
            page,
            section,
            format,
            output,
            config,
            plain,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
