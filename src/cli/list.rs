//! `list` command: human-readable reading times, newest post first.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::cli::args::PostArgs;
use crate::cli::common::{PostReport, analyse_posts};
use crate::config::SiteConfig;
use crate::reading::ReadingTimeLabels;
use crate::utils::plural_count;

/// Execute list command
pub fn run_list(args: &PostArgs, config: &SiteConfig) -> Result<()> {
    let reports = analyse_posts(args, config)?;

    for report in &reports {
        println!("{}", format_line(report, &config.locale));
    }
    println!("{}", summary(&reports, &config.locale));

    Ok(())
}

fn format_line(report: &PostReport, labels: &ReadingTimeLabels) -> String {
    let line = format!(
        "{}: {}  {} ({})",
        labels.label, report.reading_time_text, report.title, report.slug
    );
    if report.released {
        line
    } else {
        line.dimmed().to_string()
    }
}

/// `3 posts, 12 minutos in total`, the total rounded like a single post.
fn summary(reports: &[PostReport], labels: &ReadingTimeLabels) -> String {
    let minutes: f64 = reports
        .iter()
        .filter_map(|r| r.reading_time.minutes)
        .sum();
    let total = crate::reading::ReadingStatistic::from_minutes(minutes);

    format!(
        "{}, {} in total",
        plural_count(reports.len(), "post"),
        labels.translate(Some(&total))
    )
}
