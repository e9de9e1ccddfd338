//! Reading statistic produced per post.

use serde::{Deserialize, Serialize};

/// Milliseconds per minute.
const MS_PER_MINUTE: f64 = 60_000.0;

/// Estimated reading time of a single document.
///
/// Every field is optional when deserialized: the formatter only needs
/// `minutes`, and statistics coming from outside (e.g. `--json`) may carry
/// nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingStatistic {
    /// English summary, e.g. `"3 min read"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Fractional minutes to read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<f64>,

    /// Reading time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<u64>,

    /// Counted words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<usize>,
}

impl ReadingStatistic {
    /// Statistic carrying only a minutes value.
    pub const fn from_minutes(minutes: f64) -> Self {
        Self {
            text: None,
            minutes: Some(minutes),
            time: None,
            words: None,
        }
    }

    /// Build a full statistic from a word count and reading speed.
    ///
    /// `words_per_minute` must be positive; config validation guarantees it.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)] // minutes is never negative here
    pub fn from_words(words: usize, words_per_minute: u32) -> Self {
        let minutes = words as f64 / f64::from(words_per_minute.max(1));
        let time = (minutes * MS_PER_MINUTE).round() as u64;
        let displayed = ((minutes * 100.0).round() / 100.0).ceil() as u64;

        Self {
            text: Some(format!("{displayed} min read")),
            minutes: Some(minutes),
            time: Some(time),
            words: Some(words),
        }
    }
}
