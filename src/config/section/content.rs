//! `[content]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [content]
//! dir = "content/blog"          # Post root, relative to leitura.toml
//! extensions = ["md", "mdx"]    # Files treated as posts
//! include_unreleased = false    # Keep posts dated in the future
//! utc_offset = -3               # Hours; decides what "today" is
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Post discovery and release settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content directory (absolute after loading).
    pub dir: PathBuf,

    /// Post file extensions, without the dot.
    pub extensions: Vec<String>,

    /// Include posts whose date has not arrived yet.
    pub include_unreleased: bool,

    /// UTC offset in hours used to compute today's date.
    pub utc_offset: i32,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "content/blog".into(),
            extensions: vec!["md".into(), "mdx".into()],
            include_unreleased: false,
            utc_offset: -3,
        }
    }
}

impl ContentConfig {
    pub const FIELD_EXTENSIONS: FieldPath = FieldPath::new("content.extensions");
    pub const FIELD_UTC_OFFSET: FieldPath = FieldPath::new("content.utc_offset");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.extensions.is_empty() {
            diag.error_with_hint(
                Self::FIELD_EXTENSIONS,
                "no post extensions configured",
                "extensions = [\"md\", \"mdx\"]",
            );
        } else if self.extensions.iter().any(|e| e.starts_with('.')) {
            diag.error_with_hint(
                Self::FIELD_EXTENSIONS,
                "extensions must not start with a dot",
                "write \"md\" instead of \".md\"",
            );
        }

        if !(-12..=14).contains(&self.utc_offset) {
            diag.error(
                Self::FIELD_UTC_OFFSET,
                format!("{} is not a valid UTC offset (-12..=14)", self.utc_offset),
            );
        }
    }
}
