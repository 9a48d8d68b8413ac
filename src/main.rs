use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let mut logger = Builder::new();
    logger.filter_level(LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Analyze { file } => commands::handle_analyze(&cli, file),
        Commands::Compare { sender, receiver } => commands::handle_compare(&cli, sender, receiver),
    }
}
