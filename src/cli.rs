use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_MISSING_DISPLAY_LIMIT: u64 = 50;

#[derive(Parser, Debug)]
#[command(
    name = "seqcheck",
    version,
    about = "Packet loss and duplicate analysis for sequence-numbered JSONL capture logs"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MISSING_DISPLAY_LIMIT,
        help = "List missing sequences individually only up to this many; above it, show the count"
    )]
    pub missing_display_limit: u64,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Analyze {
        file: PathBuf,
    },
    Compare {
        sender: PathBuf,
        receiver: PathBuf,
    },
}
