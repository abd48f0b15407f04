//! article.rs: Article record and the labels the pipeline attaches to it.
//!
//! Records arrive as loosely-shaped JSON objects from the feed adapters. Only
//! `source`, `title`, `description` (and `url` for log context) are read; all
//! other fields ride along in `extra` and are written back untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Three-way sentiment label plus the "nothing to score" case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Unanalyzable,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Unanalyzable => "Unanalyzable",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete political lean of a publisher or an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BiasLabel {
    Left,
    Center,
    Right,
}

impl BiasLabel {
    /// Fixed reporting order.
    pub const ALL: [BiasLabel; 3] = [BiasLabel::Left, BiasLabel::Center, BiasLabel::Right];

    /// Numeric prior used by the composite classifier.
    pub fn prior(&self) -> f64 {
        match self {
            BiasLabel::Left => -1.0,
            BiasLabel::Center => 0.0,
            BiasLabel::Right => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BiasLabel::Left => "Left",
            BiasLabel::Center => "Center",
            BiasLabel::Right => "Right",
        }
    }
}

impl fmt::Display for BiasLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One news article as stored between pipeline stages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Publisher name; `null` and missing are both treated as unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentLabel>,
    /// Written as `null` once the record has been analyzed but was unanalyzable.
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub sentiment_score: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub political_bias: Option<BiasLabel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_cleaned: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_cleaned: Option<String>,

    /// Any other fields from the feed record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields the analyzer writes; any previous values are replaced on re-analysis.
pub(crate) const ANNOTATION_FIELDS: &[&str] = &["sentiment", "sentiment_score", "political_bias"];

/// Keeps an explicit `null` apart from a missing key: `null` decodes to `Some(None)`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl Article {
    /// Convenience constructor used mostly by tests and demos.
    pub fn new(source: &str, title: &str, description: &str) -> Self {
        Self {
            source: Some(source.to_string()),
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            ..Default::default()
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.as_deref().unwrap_or("")
    }

    /// `title + " " + description`, missing fields as empty, trimmed.
    pub fn content(&self) -> String {
        let title = self.title.as_deref().unwrap_or("");
        let description = self.description.as_deref().unwrap_or("");
        format!("{title} {description}").trim().to_string()
    }

    /// Sentiment score as an input term; absent or unanalyzable both read as `None`.
    pub fn sentiment_value(&self) -> Option<f64> {
        self.sentiment_score.flatten()
    }

    /// Short identifier for log lines: title, else url, else a placeholder.
    pub fn log_label(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or(self.url.as_deref())
            .unwrap_or("<untitled>")
    }
}

/// Best-effort identifier for a record that could not be decoded into an `Article`.
pub(crate) fn raw_log_label(value: &Value) -> String {
    ["title", "url"]
        .iter()
        .find_map(|k| value.get(*k).and_then(Value::as_str))
        .unwrap_or("<unidentified>")
        .to_string()
}
