//! CLI entry point for the grid inspection tool

use clap::Parser;
use gridkit::io::cli::{Cli, GridProcessor};
use gridkit::io::logging::init_logging;

fn main() -> gridkit::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let processor = GridProcessor::new(cli);
    processor.process()
}
