//! Command-line interface implementation for promptforge.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Command-line arguments structure for promptforge.
#[derive(Parser, Debug)]
#[command(author, version, about = "promptforge: build agent definition files for multiple tool layouts", long_about = None)]
pub struct Args {
    /// Build only the named target (default: all configured targets)
    #[arg(short, long, value_name = "TARGET")]
    pub target: Option<String>,

    /// Remove the output directory (or only the selected target's subtree)
    /// before building
    #[arg(long)]
    pub clean: bool,

    /// Path to the build configuration file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
