//! Blog content: post discovery, frontmatter, slugs and the release gate.
//!
//! ```text
//! content/blog/
//! ├── a-carta/
//! │   └── index.md          -> /a-carta/
//! └── sobre-nomes/
//!     └── index.mdx         -> /sobre-nomes/
//! ```

mod frontmatter;
mod post;
mod scan;
mod slug;

use std::path::{Path, PathBuf};

use crossbeam::queue::SegQueue;
use rayon::prelude::*;
use thiserror::Error;

pub use post::Post;
pub use scan::collect_post_files;

/// Errors raised while loading a post.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid frontmatter in `{0}`")]
    Frontmatter(PathBuf, #[source] toml::de::Error),
}

/// Lock-free collector for parallel results.
pub struct ParallelCollector<T> {
    queue: SegQueue<T>,
}

impl<T> ParallelCollector<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            queue: SegQueue::new(),
        }
    }

    /// Push an item (lock-free, wait-free).
    #[inline]
    pub fn push(&self, item: T) {
        self.queue.push(item);
    }

    /// Drain all items with pre-allocated capacity.
    pub fn drain_with_capacity(self, capacity: usize) -> Vec<T> {
        let mut results = Vec::with_capacity(capacity);
        while let Some(item) = self.queue.pop() {
            results.push(item);
        }
        results
    }
}

impl<T> Default for ParallelCollector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Posts that loaded, and the files that failed with their errors.
#[derive(Debug, Default)]
pub struct LoadedPosts {
    pub posts: Vec<Post>,
    pub failures: Vec<ContentError>,
}

/// Load posts in parallel.
///
/// Order of the result is unspecified; callers sort.
pub fn load_posts(files: &[PathBuf], content_dir: &Path) -> LoadedPosts {
    let posts = ParallelCollector::new();
    let failures = ParallelCollector::new();

    files
        .par_iter()
        .for_each(|file| match Post::load(file, content_dir) {
            Ok(post) => posts.push(post),
            Err(e) => failures.push(e),
        });

    LoadedPosts {
        posts: posts.drain_with_capacity(files.len()),
        failures: failures.drain_with_capacity(0),
    }
}
