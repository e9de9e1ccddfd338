//! Post metadata from YAML (`---`) or TOML (`+++`) frontmatter.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Frontmatter fields of a blog post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMeta {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "featuredImage")]
    pub featured_image: Option<String>,
    /// Any other key, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Split a post into its metadata and body.
///
/// Returns `(None, content)` when the post has no frontmatter.
/// Only TOML frontmatter can fail; YAML is parsed leniently.
pub fn extract_frontmatter(content: &str) -> Result<(Option<PostMeta>, &str), toml::de::Error> {
    match detect_frontmatter(content) {
        Some((fm, body, true)) => Ok((Some(parse_toml(fm)?), body)),
        Some((fm, body, false)) => Ok((Some(parse_yaml_like(fm)), body)),
        None => Ok((None, content)),
    }
}

/// Parse TOML frontmatter.
///
/// Native TOML dates (`date = 2024-05-10`) become their text form so they
/// read the same as quoted ones.
fn parse_toml(content: &str) -> Result<PostMeta, toml::de::Error> {
    let mut table: toml::Table = toml::from_str(content)?;
    table.iter_mut().map(|(_, v)| v).for_each(datetime_to_string);
    toml::Value::Table(table).try_into()
}

fn datetime_to_string(value: &mut toml::Value) {
    match value {
        toml::Value::Datetime(datetime) => {
            let text = datetime.to_string();
            *value = toml::Value::String(text);
        }
        toml::Value::Array(items) => items.iter_mut().for_each(datetime_to_string),
        toml::Value::Table(table) => table.iter_mut().map(|(_, v)| v).for_each(datetime_to_string),
        _ => {}
    }
}

/// Detect and extract frontmatter.
/// Returns `(frontmatter, body, is_toml)` if found.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if trimmed.starts_with(fence)
            && let Some(end) = trimmed[3..].find(&format!("\n{fence}"))
        {
            let fm = trimmed[3..3 + end].trim();
            let rest = &trimmed[3 + end + 4..];
            // Drop the remainder of the closing fence line
            let body = rest.split_once('\n').map_or("", |(_, body)| body);
            return Some((fm, body.trim_start_matches(['\r', '\n']), is_toml));
        }
    }

    None
}

/// Parse simple YAML-like frontmatter (`key: value`).
///
/// Nested YAML (lists, maps) is not supported; indented lines are ignored.
fn parse_yaml_like(content: &str) -> PostMeta {
    let mut meta = PostMeta::default();

    for line in content.lines() {
        if line.starts_with([' ', '\t', '-']) {
            continue;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = unquote(value.trim());
        if value.is_empty() {
            continue;
        }

        match key.to_lowercase().as_str() {
            "title" => meta.title = Some(value.to_string()),
            "date" => meta.date = Some(value.to_string()),
            "description" => meta.description = Some(value.to_string()),
            "featuredimage" | "featured_image" => meta.featured_image = Some(value.to_string()),
            _ => {
                meta.extra.insert(key.to_string(), parse_yaml_value(value));
            }
        }
    }

    meta
}

/// Strip one level of matching single or double quotes.
fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2
            && let Some(inner) = s.strip_prefix(quote).and_then(|s| s.strip_suffix(quote))
        {
            return inner;
        }
    }
    s
}

/// Parse a YAML-like scalar to a JSON value
fn parse_yaml_value(s: &str) -> JsonValue {
    if s.eq_ignore_ascii_case("true") {
        return JsonValue::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return JsonValue::Bool(false);
    }
    if s.eq_ignore_ascii_case("null") || s == "~" {
        return JsonValue::Null;
    }
    if let Ok(n) = s.parse::<i64>() {
        return JsonValue::Number(n.into());
    }
    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(n)
    {
        return JsonValue::Number(num);
    }
    JsonValue::String(s.to_string())
}
