//! `[reading]` section configuration.
//!
//! ```toml
//! [reading]
//! words_per_minute = 200
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::reading::{DEFAULT_WORDS_PER_MINUTE, Estimator};

/// Reading speed used by the estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    pub words_per_minute: u32,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl ReadingConfig {
    pub const FIELD_WORDS_PER_MINUTE: FieldPath = FieldPath::new("reading.words_per_minute");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.words_per_minute == 0 {
            diag.error_with_hint(
                Self::FIELD_WORDS_PER_MINUTE,
                "reading speed must be positive",
                format!("the default is {DEFAULT_WORDS_PER_MINUTE}"),
            );
        }
    }

    pub fn estimator(&self) -> Estimator {
        Estimator::new(self.words_per_minute)
    }
}
