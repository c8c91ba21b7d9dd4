//! webpify - point `<img>` jpg/png sources in html trees at their webp variants.

mod cli;
mod config;
mod logger;
mod rewrite;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::RewriteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = RewriteConfig::from_cli(&cli)?;
    let report = rewrite::run(&config)?;

    debug!("done"; "{}", report);
    Ok(())
}
