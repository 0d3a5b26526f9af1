//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "archcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for archives
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Scan subdirectories (always on; accepted for compatibility)
    #[arg(short, long)]
    pub recursive: bool,

    /// Exit with an error when an archive could not be tested
    #[arg(long)]
    pub unavailable_fails: bool,

    /// Path to the 7-Zip executable used for multi-volume archives
    #[arg(long, value_name = "PATH")]
    pub tool: Option<PathBuf>,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}
