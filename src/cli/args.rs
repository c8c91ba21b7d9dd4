//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Point <img> jpg/png sources in html files at their webp variants
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Root directory to scan for .html files
    #[arg(default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub root: PathBuf,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// List files that would change without writing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output (unchanged files, pruned directories, summary)
    #[arg(short, long)]
    pub verbose: bool,
}
