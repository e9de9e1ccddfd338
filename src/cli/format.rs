//! `format` command: localized phrase for a single reading statistic.

use anyhow::{Context, Result};

use crate::cli::args::FormatArgs;
use crate::config::SiteConfig;
use crate::reading::{ReadingStatistic, ReadingTimeLabels};

/// Execute format command
pub fn run_format(args: &FormatArgs, config: &SiteConfig) -> Result<()> {
    println!("{}", format_phrase(args, &config.locale)?);
    Ok(())
}

fn format_phrase(args: &FormatArgs, labels: &ReadingTimeLabels) -> Result<String> {
    let stats = parse_statistic(args)?;
    Ok(labels.translate(stats.as_ref()))
}

/// Statistic described by the arguments; `None` when it is absent.
fn parse_statistic(args: &FormatArgs) -> Result<Option<ReadingStatistic>> {
    if let Some(json) = &args.json {
        return serde_json::from_str(json)
            .with_context(|| format!("invalid reading statistic: {json}"));
    }

    Ok(args.minutes.as_deref().map(|raw| {
        let minutes = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
        ReadingStatistic::from_minutes(minutes)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(raw: &str) -> FormatArgs {
        FormatArgs {
            minutes: Some(raw.to_string()),
            json: None,
        }
    }

    fn json(raw: &str) -> FormatArgs {
        FormatArgs {
            minutes: None,
            json: Some(raw.to_string()),
        }
    }

    fn phrase(args: &FormatArgs) -> String {
        format_phrase(args, &ReadingTimeLabels::default()).unwrap()
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(phrase(&minutes("0.4")), "menos de 1 minuto");
        assert_eq!(phrase(&minutes("0.5")), "1 minuto");
        assert_eq!(phrase(&minutes("1.6")), "2 minutos");
        assert_eq!(phrase(&minutes(" 12 ")), "12 minutos");
    }

    #[test]
    fn test_format_missing_statistic() {
        let args = FormatArgs {
            minutes: None,
            json: None,
        };
        assert_eq!(phrase(&args), "Unknown");
        assert_eq!(phrase(&json("null")), "Unknown");
        assert_eq!(phrase(&json("{}")), "Unknown");
    }

    #[test]
    fn test_format_non_numeric_counts_as_zero() {
        assert_eq!(phrase(&minutes("abc")), "menos de 1 minuto");
        assert_eq!(phrase(&minutes("-3")), "menos de 1 minuto");
        assert_eq!(phrase(&minutes("NaN")), "menos de 1 minuto");
    }

    #[test]
    fn test_format_json() {
        assert_eq!(phrase(&json(r#"{"minutes": 1.4}"#)), "1 minuto");
        assert_eq!(
            phrase(&json(r#"{"text": "3 min read", "minutes": 2.25, "time": 135000, "words": 450}"#)),
            "2 minutos"
        );
    }

    #[test]
    fn test_format_invalid_json() {
        let err = format_phrase(&json("{minutes"), &ReadingTimeLabels::default()).unwrap_err();
        assert!(err.to_string().contains("invalid reading statistic"));
    }
}
