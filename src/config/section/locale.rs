//! `[locale]` section configuration.
//!
//! Phrases used for reading times. Defaults are Portuguese:
//!
//! ```toml
//! [locale]
//! unknown = "Unknown"
//! less_than_one = "menos de 1 minuto"
//! one = "1 minuto"
//! many = "{} minutos"
//! label = "Tempo de leitura"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::reading::{COUNT_PLACEHOLDER, ReadingTimeLabels};

const FIELD_MANY: FieldPath = FieldPath::new("locale.many");

/// Check that the plural template has exactly one count placeholder.
pub fn validate_labels(labels: &ReadingTimeLabels, diag: &mut ConfigDiagnostics) {
    let placeholders = labels.many.matches(COUNT_PLACEHOLDER).count();
    if placeholders != 1 {
        diag.error_with_hint(
            FIELD_MANY,
            format!("expected one `{COUNT_PLACEHOLDER}` placeholder, found {placeholders}"),
            "many = \"{} minutos\"",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_locale_override() {
        let config = test_parse_config("[locale]\nmany = \"{} minutes\"\none = \"1 minute\"");
        assert_eq!(config.locale.many, "{} minutes");
        assert_eq!(config.locale.one, "1 minute");
        // Unset keys keep their defaults
        assert_eq!(config.locale.less_than_one, "menos de 1 minuto");
    }

    #[test]
    fn test_many_requires_placeholder() {
        let config = test_parse_config("[locale]\nmany = \"minutos\"");
        let mut diag = ConfigDiagnostics::new();
        validate_labels(&config.locale, &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_default_labels_valid() {
        let mut diag = ConfigDiagnostics::new();
        validate_labels(&ReadingTimeLabels::default(), &mut diag);
        assert!(!diag.has_errors());
    }
}
