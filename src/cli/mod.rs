//! Command-line interface module.

mod args;
pub mod common;
pub mod format;
pub mod list;
pub mod stats;

pub use args::{Cli, Commands};
