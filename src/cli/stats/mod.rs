//! Stats command implementation.
//!
//! Estimates the reading time of every selected post in parallel and
//! prints one JSON object per post.

mod output;

use anyhow::Result;

use crate::cli::args::StatsArgs;
use crate::cli::common::analyse_posts;
use crate::config::SiteConfig;
use crate::log;
use crate::utils::plural_count;

/// Execute stats command
pub fn run_stats(args: &StatsArgs, config: &SiteConfig) -> Result<()> {
    let reports = analyse_posts(&args.posts, config)?;

    log!("stats"; "analysed {}", plural_count(reports.len(), "post"));

    output::output_reports(&reports, args)
}
