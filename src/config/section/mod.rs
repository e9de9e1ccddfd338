//! Configuration section definitions.
//!
//! | Module    | TOML Section | Purpose                              |
//! |-----------|--------------|--------------------------------------|
//! | `content` | `[content]`  | Post discovery, release gate         |
//! | `reading` | `[reading]`  | Estimator speed                      |
//! | `locale`  | `[locale]`   | Reading-time phrases                 |

mod content;
mod locale;
mod reading;

pub use content::ContentConfig;
pub use locale::validate_labels;
pub use reading::ReadingConfig;
