//! Post analysis shared by `stats` and `list`.

use anyhow::Result;
use serde::Serialize;

use crate::cli::args::PostArgs;
use crate::config::SiteConfig;
use crate::content::{LoadedPosts, ParallelCollector, Post, collect_post_files, load_posts};
use crate::reading::{Estimator, ReadingStatistic};
use crate::utils::date::PostDate;
use crate::utils::plural_count;
use crate::{debug, log};
use rayon::prelude::*;

/// Reading-time report for one post.
#[derive(Debug, Clone, Serialize)]
pub struct PostReport {
    pub path: String,
    pub slug: String,
    pub title: String,
    pub date: Option<PostDate>,
    pub released: bool,
    pub reading_time: ReadingStatistic,
    pub reading_time_text: String,
}

/// Discover, load and estimate the posts selected by `args`.
///
/// Posts that fail to load are reported as warnings and skipped. Reports
/// are sorted newest first, then by slug.
pub fn analyse_posts(args: &PostArgs, config: &SiteConfig) -> Result<Vec<PostReport>> {
    let files = collect_post_files(&args.paths, &config.content.dir, &config.content.extensions)?;
    debug!("content"; "found {}", plural_count(files.len(), "post file"));

    let LoadedPosts { posts, failures } = load_posts(&files, &config.content.dir);
    for err in failures {
        log!("warning"; "{:#}, skipping", anyhow::Error::from(err));
    }

    Ok(build_reports(&posts, config))
}

fn build_reports(posts: &[Post], config: &SiteConfig) -> Vec<PostReport> {
    let today = config.today();
    let estimator = config.reading.estimator();
    let include_unreleased = config.content.include_unreleased;

    let collector = ParallelCollector::new();
    posts.par_iter().for_each(|post| {
        let released = post.is_released(today);
        if !released && !include_unreleased {
            debug!("content"; "{} is not released yet", post.slug);
            return;
        }
        collector.push(build_report(post, released, &estimator, config));
    });

    let mut reports = collector.drain_with_capacity(posts.len());
    reports.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
    reports
}

fn build_report(
    post: &Post,
    released: bool,
    estimator: &Estimator,
    config: &SiteConfig,
) -> PostReport {
    let reading_time = estimator.estimate(&post.body);
    let reading_time_text = config.locale.translate(Some(&reading_time));

    PostReport {
        path: config.root_relative(&post.path).display().to_string(),
        slug: post.slug.clone(),
        title: post.title().to_string(),
        date: post.date,
        released,
        reading_time,
        reading_time_text,
    }
}
