//! CLI entry point for applying grid operations to PNG images

use cellgrid::io::cli::{Cli, FileProcessor};
use cellgrid::io::configuration::DEFAULT_LOG_FILTER;
use clap::Parser;

fn main() -> cellgrid::Result<()> {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
