//! Leitura - reading-time estimates and labels for a Markdown blog.

mod cli;
mod config;
mod content;
mod logger;
mod reading;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;
    debug!("config"; "content dir {}", config.content.dir.display());

    match &cli.command {
        Commands::Format { args } => cli::format::run_format(args, &config),
        Commands::Stats { args } => cli::stats::run_stats(args, &config),
        Commands::List { posts } => cli::list::run_list(posts, &config),
    }
}
