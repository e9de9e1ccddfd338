//! Localized reading-time phrases.
//!
//! Maps a fractional-minutes estimate to the phrase shown next to a post:
//!
//! | rounded minutes | phrase               |
//! |-----------------|----------------------|
//! | (no statistic)  | `Unknown`            |
//! | 0               | `menos de 1 minuto`  |
//! | 1               | `1 minuto`           |
//! | n               | `n minutos`          |
//!
//! Rounding is half-up (`1.5 -> 2`, `1.4 -> 1`), never ceiling.

use serde::{Deserialize, Serialize};

use super::ReadingStatistic;

/// Placeholder replaced by the minute count in [`ReadingTimeLabels::many`].
pub const COUNT_PLACEHOLDER: &str = "{}";

/// Phrases used by the formatter, configurable under `[locale]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingTimeLabels {
    /// Shown when no statistic is available.
    pub unknown: String,
    /// Shown when the rounded count is zero.
    pub less_than_one: String,
    /// Shown when the rounded count is exactly one.
    pub one: String,
    /// Template for larger counts, `{}` is the count.
    pub many: String,
    /// Caption printed before the phrase by `list`.
    pub label: String,
}

impl Default for ReadingTimeLabels {
    fn default() -> Self {
        Self {
            unknown: "Unknown".to_string(),
            less_than_one: "menos de 1 minuto".to_string(),
            one: "1 minuto".to_string(),
            many: "{} minutos".to_string(),
            label: "Tempo de leitura".to_string(),
        }
    }
}

impl ReadingTimeLabels {
    /// Format a statistic with these labels.
    pub fn translate(&self, stats: Option<&ReadingStatistic>) -> String {
        let Some(minutes) = stats.and_then(|s| s.minutes) else {
            return self.unknown.clone();
        };

        match round_half_up(minutes) {
            0 => self.less_than_one.clone(),
            1 => self.one.clone(),
            n => self.many.replacen(COUNT_PLACEHOLDER, &n.to_string(), 1),
        }
    }
}

/// Format a statistic with the default Portuguese labels.
///
/// Total over its input: absent statistics, NaN and negative values all
/// yield a phrase.
pub fn translate_reading_time(stats: Option<&ReadingStatistic>) -> String {
    ReadingTimeLabels::default().translate(stats)
}

/// Round to the nearest whole minute, halves rounding up.
///
/// NaN, infinite and negative inputs count as zero minutes.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_half_up(minutes: f64) -> u64 {
    if !minutes.is_finite() || minutes <= 0.0 {
        return 0;
    }
    let whole = minutes.floor();
    let rounded = if minutes - whole < 0.5 { whole } else { whole + 1.0 };
    rounded as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(m: f64) -> String {
        translate_reading_time(Some(&ReadingStatistic::from_minutes(m)))
    }

    #[test]
    fn test_missing_statistic_is_unknown() {
        assert_eq!(translate_reading_time(None), "Unknown");
    }

    #[test]
    fn test_missing_minutes_is_unknown() {
        let stats = ReadingStatistic {
            words: Some(120),
            ..Default::default()
        };
        assert_eq!(translate_reading_time(Some(&stats)), "Unknown");
    }

    #[test]
    fn test_less_than_one_minute() {
        assert_eq!(minutes(0.0), "menos de 1 minuto");
        assert_eq!(minutes(0.4), "menos de 1 minuto");
    }

    #[test]
    fn test_one_minute() {
        assert_eq!(minutes(0.5), "1 minuto");
        assert_eq!(minutes(1.0), "1 minuto");
        assert_eq!(minutes(1.4), "1 minuto");
    }

    #[test]
    fn test_many_minutes() {
        assert_eq!(minutes(1.6), "2 minutos");
        assert_eq!(minutes(2.0), "2 minutos");
        assert_eq!(minutes(12.5), "13 minutos");
    }

    #[test]
    fn test_rounds_half_up_not_ceiling() {
        // ceil(1.1) would give 2
        assert_eq!(minutes(1.1), "1 minuto");
        assert_eq!(round_half_up(1.5), 2);
        assert_eq!(round_half_up(2.49), 2);
    }

    #[test]
    fn test_invalid_minutes_clamp_to_zero() {
        assert_eq!(minutes(-3.0), "menos de 1 minuto");
        assert_eq!(minutes(f64::NAN), "menos de 1 minuto");
        assert_eq!(minutes(f64::INFINITY), "menos de 1 minuto");
        assert_eq!(minutes(f64::NEG_INFINITY), "menos de 1 minuto");
    }

    #[test]
    fn test_idempotent() {
        let stats = ReadingStatistic::from_minutes(3.7);
        let first = translate_reading_time(Some(&stats));
        let second = translate_reading_time(Some(&stats));
        assert_eq!(first, second);
        assert_eq!(stats, ReadingStatistic::from_minutes(3.7));
    }

    #[test]
    fn test_custom_labels() {
        let labels = ReadingTimeLabels {
            unknown: "?".into(),
            less_than_one: "under a minute".into(),
            one: "1 minute".into(),
            many: "{} minutes".into(),
            label: "Reading time".into(),
        };
        let stats = ReadingStatistic::from_minutes(4.2);
        assert_eq!(labels.translate(Some(&stats)), "4 minutes");
        assert_eq!(labels.translate(None), "?");
    }
}
