//! Reading-time statistics and their localized presentation.
//!
//! ```text
//! markdown body ──► Estimator ──► ReadingStatistic ──► ReadingTimeLabels ──► "3 minutos"
//! ```

mod estimate;
mod stats;
mod translate;

pub use estimate::{DEFAULT_WORDS_PER_MINUTE, Estimator};
pub use stats::ReadingStatistic;
pub use translate::{COUNT_PLACEHOLDER, ReadingTimeLabels, translate_reading_time};
