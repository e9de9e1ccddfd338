//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_NAME;
use std::path::PathBuf;

/// Reading-time estimates and labels for a Markdown blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: leitura.toml)
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG_NAME, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the localized reading time for a minutes value
    #[command(visible_alias = "f")]
    Format {
        #[command(flatten)]
        args: FormatArgs,
    },

    /// Report reading statistics of posts as JSON
    #[command(visible_alias = "s")]
    Stats {
        #[command(flatten)]
        args: StatsArgs,
    },

    /// List posts with their reading time
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        posts: PostArgs,
    },
}

/// Format command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct FormatArgs {
    /// Minutes to read. Omit to format a missing statistic.
    /// Values that are not numbers count as zero.
    #[arg(allow_hyphen_values = true, conflicts_with = "json")]
    pub minutes: Option<String>,

    /// Reading statistic as JSON, e.g. '{"minutes": 1.4}' or 'null'
    #[arg(short, long)]
    pub json: Option<String>,
}

/// Post selection shared by Stats and List.
#[derive(clap::Args, Debug, Clone)]
pub struct PostArgs {
    /// Posts or directories (omit for all content).
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Include posts whose date has not arrived yet
    #[arg(short, long)]
    pub drafts: bool,

    /// Override reading speed (words per minute)
    #[arg(short = 'w', long)]
    pub wpm: Option<u32>,
}

/// Stats command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub posts: PostArgs,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Filter output to specific fields (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Post selection of the current command, if it reads posts.
    pub fn post_args(&self) -> Option<&PostArgs> {
        match &self.command {
            Commands::Stats { args } => Some(&args.posts),
            Commands::List { posts } => Some(posts),
            Commands::Format { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        let cli = Cli::try_parse_from(["leitura", "format", "1.4"]).unwrap();
        match cli.command {
            Commands::Format { args } => assert_eq!(args.minutes.as_deref(), Some("1.4")),
            _ => panic!("expected format"),
        }
    }

    #[test]
    fn test_parse_format_negative() {
        let cli = Cli::try_parse_from(["leitura", "format", "-2"]).unwrap();
        match cli.command {
            Commands::Format { args } => assert_eq!(args.minutes.as_deref(), Some("-2")),
            _ => panic!("expected format"),
        }
    }

    #[test]
    fn test_format_minutes_conflicts_with_json() {
        let result = Cli::try_parse_from(["leitura", "format", "1", "--json", "null"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_stats() {
        let cli = Cli::try_parse_from([
            "leitura", "stats", "a-carta", "-d", "-p", "-f", "slug,title", "--wpm", "250",
        ])
        .unwrap();
        let posts = cli.post_args().unwrap();
        assert_eq!(posts.paths, vec![PathBuf::from("a-carta")]);
        assert!(posts.drafts);
        assert_eq!(posts.wpm, Some(250));
        match cli.command {
            Commands::Stats { args } => {
                assert!(args.pretty);
                assert_eq!(
                    args.fields,
                    Some(vec!["slug".to_string(), "title".to_string()])
                );
            }
            _ => panic!("expected stats"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["leitura", "list", "-v", "-c", "posts"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.content, Some(PathBuf::from("posts")));
        assert_eq!(cli.config, PathBuf::from("leitura.toml"));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
