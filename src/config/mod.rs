//! Site configuration management for `leitura.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [content], [reading], [locale]
//! ├── types/         # ConfigError, diagnostics, FieldPath
//! ├── util.rs        # config file lookup
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config file is optional: without one, every section uses its
//! defaults and the project root is the current directory.

pub mod section;
pub mod types;
mod util;

pub use section::{ContentConfig, ReadingConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::Cli;
use crate::reading::ReadingTimeLabels;
use crate::utils::date::PostDate;
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::locate_config;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "leitura.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing leitura.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Post discovery settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Estimator settings
    #[serde(default)]
    pub reading: ReadingConfig,

    /// Reading-time phrases
    #[serde(default)]
    pub locale: ReadingTimeLabels,
}

impl SiteConfig {
    /// Load configuration for the parsed CLI.
    ///
    /// Searches upward from cwd for the config file. CLI flags override
    /// file values.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match locate_config(&cli.config, &cwd)? {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(crate::utils::path::normalize_path(&path));
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.apply_cli(cli);
        config.normalize_paths();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Path relative to the project root, for display.
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Today's date in the configured UTC offset.
    pub fn today(&self) -> PostDate {
        PostDate::today(self.content.utc_offset)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_cli(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        Self::update_option(&mut self.content.dir, cli.content.as_ref());

        if let Some(args) = cli.post_args() {
            Self::update_option(&mut self.reading.words_per_minute, args.wpm.as_ref());
            if args.drafts {
                self.content.include_unreleased = true;
            }
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Make the content directory absolute (relative to root).
    fn normalize_paths(&mut self) {
        let root = crate::utils::path::normalize_path(&self.root);
        self.content.dir = crate::utils::path::normalize_path(&root.join(&self.content.dir));
        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, reporting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.content.validate(&mut diag);
        self.reading.validate(&mut diag);
        section::validate_labels(&self.locale, &mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::parse_with_ignored("[content\ndir = \"x\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert!(config.config_path.is_none());
        assert_eq!(config.reading.words_per_minute, 200);
        assert_eq!(config.locale, ReadingTimeLabels::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[reading]\nwords_per_minute = 180\n[disqus]\nshortname = \"x\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.reading.words_per_minute, 180);
        assert!(ignored.iter().any(|f| f.contains("disqus")));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            "[reading]\nwords_per_minute = 0\n[locale]\nmany = \"minutos\"\n[content]\nextensions = []",
        );
        let err = config.validate().unwrap_err();
        let diag = match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => diag,
            other => panic!("unexpected error: {other:?}"),
        };
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from(["leitura", "stats", "-d", "--wpm", "300", "-c", "posts"])
            .unwrap();
        let mut config = SiteConfig {
            root: PathBuf::from("/site"),
            ..SiteConfig::default()
        };
        config.apply_cli(&cli);

        assert_eq!(config.reading.words_per_minute, 300);
        assert!(config.content.include_unreleased);
        assert_eq!(config.content.dir, PathBuf::from("posts"));
    }

    #[test]
    fn test_normalize_content_dir() {
        let mut config = SiteConfig {
            root: PathBuf::from("/site-que-nao-existe"),
            ..SiteConfig::default()
        };
        config.normalize_paths();
        assert_eq!(
            config.content.dir,
            PathBuf::from("/site-que-nao-existe/content/blog")
        );
        assert_eq!(
            config.root_relative("/site-que-nao-existe/content/blog/a.md"),
            PathBuf::from("content/blog/a.md")
        );
    }
}
