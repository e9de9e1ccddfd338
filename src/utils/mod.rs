//! Shared helpers.

pub mod date;
pub mod path;
pub mod plural;

pub use plural::plural_count;
