//! CLI entry point for the hole filling tool

use clap::Parser;
use holefill::io::cli::{Cli, FillProcessor};

fn main() -> holefill::Result<()> {
    let cli = Cli::parse();
    let mut processor = FillProcessor::new(cli);
    processor.process()
}
