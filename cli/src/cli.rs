//! Command-line argument definitions
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "floodgate", about = "Multi-source, multi-sink maximum flow solver", version)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON solver configuration (limits and empty-role policy)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Solve one problem read from a JSON file, or stdin with `-`
    Solve {
        input: PathBuf,
        /// Print every augmenting path
        #[arg(long)]
        trace: bool,
    },
    /// Solve a JSON array of independent problems in parallel
    Batch {
        input: PathBuf,
    },
}
