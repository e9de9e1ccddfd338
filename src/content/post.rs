//! A single blog post loaded from disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::ContentError;
use super::frontmatter::{PostMeta, extract_frontmatter};
use super::slug::slug_for;
use crate::utils::date::PostDate;

/// Parsed post: metadata plus Markdown body without frontmatter.
#[derive(Debug, Clone)]
pub struct Post {
    pub path: PathBuf,
    pub slug: String,
    pub meta: PostMeta,
    /// Publication date parsed from `meta.date`.
    pub date: Option<PostDate>,
    pub body: String,
}

impl Post {
    /// Read and parse a post file.
    pub fn load(path: &Path, content_dir: &Path) -> Result<Self, ContentError> {
        let source =
            fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
        Self::parse(path, content_dir, &source)
    }

    /// Parse post source already in memory.
    pub fn parse(path: &Path, content_dir: &Path, source: &str) -> Result<Self, ContentError> {
        let (meta, body) = extract_frontmatter(source)
            .map_err(|err| ContentError::Frontmatter(path.to_path_buf(), err))?;
        let meta = meta.unwrap_or_default();
        let date = meta.date.as_deref().and_then(PostDate::parse);

        Ok(Self {
            path: path.to_path_buf(),
            slug: slug_for(path, content_dir),
            meta,
            date,
            body: body.to_string(),
        })
    }

    /// Title, falling back to the slug like the blog's post cards do.
    pub fn title(&self) -> &str {
        self.meta.title.as_deref().unwrap_or(&self.slug)
    }

    /// Whether the post is public on `today`.
    ///
    /// Posts without a valid date are never released.
    pub fn is_released(&self, today: PostDate) -> bool {
        self.date.is_some_and(|date| date <= today)
    }
}
