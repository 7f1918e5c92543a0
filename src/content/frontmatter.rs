//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Reasons a header block could not be turned into a [`FrontMatter`]
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("no front-matter block at the start of the file")]
    Missing,

    #[error("front-matter block is not closed with '---'")]
    Unterminated,

    #[error("YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field `{0}` must not be empty")]
    Empty(&'static str),
}

/// Validated front-matter of a post.
///
/// `title`, `date` and `tags` are required. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    #[serde(deserialize_with = "date_string")]
    pub date: NaiveDateTime,
    #[serde(deserialize_with = "comma_list_or_seq")]
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        let (fm, body) = if content.starts_with("---") {
            let (yaml, body) = split_yaml(content)?;
            (serde_yaml::from_str::<FrontMatter>(yaml)?, body)
        } else if content.starts_with('{') {
            parse_json(content)?
        } else {
            return Err(FrontMatterError::Missing);
        };

        if fm.title.trim().is_empty() {
            return Err(FrontMatterError::Empty("title"));
        }

        Ok((fm, body.trim_start_matches(['\n', '\r'])))
    }
}

/// Split a `---` delimited header from the body
fn split_yaml(content: &str) -> Result<(&str, &str), FrontMatterError> {
    let rest = &content[3..];
    let rest = match rest.find('\n') {
        Some(pos) if rest[..pos].trim().is_empty() => &rest[pos + 1..],
        // "---" followed by text on the same line is a thematic break, not a header
        _ => return Err(FrontMatterError::Missing),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Ok((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unterminated)
}

/// A leading JSON object used as the header
fn parse_json(content: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    let mut stream = serde_json::Deserializer::from_str(content).into_iter::<FrontMatter>();
    match stream.next() {
        Some(Ok(fm)) => Ok((fm, &content[stream.byte_offset()..])),
        Some(Err(e)) => Err(e.into()),
        None => Err(FrontMatterError::Missing),
    }
}

/// Parse a date string in various formats
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

fn date_string<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct DateVisitor;

    impl<'de> Visitor<'de> for DateVisitor {
        type Value = NaiveDateTime;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a date such as 2024-01-15 or 2024-01-15 10:30:00")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            parse_date_string(value)
                .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(DateVisitor)
}

/// Tags may be written as a YAML/JSON list or as one comma-joined string.
/// List items are kept as written apart from empty entries; the joined form
/// is split, trimmed and de-duplicated.
fn comma_list_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct CommaListOrSeq;

    impl<'de> Visitor<'de> for CommaListOrSeq {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a comma-separated string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(normalize_tags(value.split(',')))
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut tags = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                if !item.is_empty() {
                    tags.push(item);
                }
            }
            Ok(tags)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(CommaListOrSeq)
}

fn normalize_tags<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}
