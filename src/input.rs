//! Field-level coercion of request payloads.
//!
//! Every field has exactly one coercion function with a fixed default, so a
//! malformed field degrades to that default instead of failing the request.
//! Only the shape of the top-level document is validated (see `api`).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use tracing::{debug, warn};

/// Raw engagement counters for one video.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub published_at: Option<DateTime<Utc>>,
}

impl MetricsSnapshot {
    pub fn new(view_count: u64, like_count: u64, comment_count: u64) -> Self {
        Self {
            view_count,
            like_count,
            comment_count,
            published_at: None,
        }
    }

    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// Reads `viewCount`, `likeCount`, `commentCount` and `publishedAt`.
    /// Anything that is not an object yields an all-zero snapshot.
    pub fn from_value(value: &Value) -> Self {
        Self {
            view_count: coerce_count(value.get("viewCount")),
            like_count: coerce_count(value.get("likeCount")),
            comment_count: coerce_count(value.get("commentCount")),
            published_at: coerce_timestamp(value.get("publishedAt")),
        }
    }
}

/// Sentiment tallies produced by the comment classifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentimentAggregate {
    pub positive: u64,
    pub negative: u64,
    pub total: u64,
    pub joy: Option<u64>,
}

impl SentimentAggregate {
    pub fn new(positive: u64, negative: u64, total: u64) -> Self {
        Self {
            positive,
            negative,
            total,
            joy: None,
        }
    }

    pub fn with_joy(mut self, joy: u64) -> Self {
        self.joy = Some(joy);
        self
    }

    /// Denominator for every ratio. A zero total is floored to 1.
    pub fn ratio_base(&self) -> f64 {
        self.total.max(1) as f64
    }

    pub fn positive_ratio(&self) -> f64 {
        self.positive as f64 / self.ratio_base()
    }

    pub fn negative_ratio(&self) -> f64 {
        self.negative as f64 / self.ratio_base()
    }

    pub fn joy_ratio(&self) -> f64 {
        self.joy.unwrap_or(0) as f64 / self.ratio_base()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentRecord {
    pub text: String,
    pub published_at: Option<DateTime<Utc>>,
}

impl CommentRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            published_at: None,
        }
    }

    pub fn posted_at(text: impl Into<String>, published_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            published_at: Some(published_at),
        }
    }
}

/// Non-negative counter. Default: 0.
///
/// Accepts JSON numbers and numeric strings (the YouTube Data API returns
/// statistics as strings). Fractions are truncated; negatives become 0.
pub fn coerce_count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(number)) => number
            .as_u64()
            .unwrap_or_else(|| number.as_f64().map(truncate_non_negative).unwrap_or(0)),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            trimmed
                .parse::<u64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(truncate_non_negative))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn truncate_non_negative(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.trunc() as u64
    } else {
        0
    }
}

/// ISO-8601 instant. Default: `None`.
///
/// RFC 3339 strings carry their own offset; zone-less date-times and bare
/// dates are read as UTC.
pub fn coerce_timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let text = value?.as_str()?.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    debug!(value = text, "unparsable timestamp ignored");
    None
}

/// Optional sentiment aggregate. Default: `None`, which disables every
/// sentiment booster downstream.
///
/// `joy` is read from a top-level field, or from `emotions.joy` when a full
/// classification summary is passed back in.
pub fn coerce_sentiment(value: Option<&Value>) -> Option<SentimentAggregate> {
    let object = match value {
        Some(Value::Object(object)) => object,
        Some(Value::Null) | None => return None,
        Some(other) => {
            warn!(kind = value_kind(other), "sentiment is not an object; ignoring");
            return None;
        }
    };

    let joy = object
        .get("joy")
        .filter(|value| !value.is_null())
        .or_else(|| object.get("emotions").and_then(|emotions| emotions.get("joy")))
        .map(|value| coerce_count(Some(value)));

    Some(SentimentAggregate {
        positive: coerce_count(object.get("positive")),
        negative: coerce_count(object.get("negative")),
        total: coerce_count(object.get("total")),
        joy,
    })
}

/// One comment: either a bare string or an object carrying `text`
/// (`textDisplay` / `textOriginal` are accepted too) and `publishedAt`.
/// Entries with no usable text yield `None`.
pub fn coerce_comment(value: &Value) -> Option<CommentRecord> {
    match value {
        Value::String(text) => Some(CommentRecord::new(text.clone())),
        Value::Object(object) => {
            let text = ["text", "textDisplay", "textOriginal"]
                .iter()
                .find_map(|key| object.get(*key).and_then(Value::as_str))?;
            let published_at = coerce_timestamp(
                object
                    .get("publishedAt")
                    .or_else(|| object.get("published_at")),
            );
            Some(CommentRecord {
                text: text.to_string(),
                published_at,
            })
        }
        _ => None,
    }
}

/// Comment list. Default: empty. Unusable entries are skipped individually.
pub fn coerce_comments(value: Option<&Value>) -> Vec<CommentRecord> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    let mut comments = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match coerce_comment(item) {
            Some(comment) => comments.push(comment),
            None => warn!(index, kind = value_kind(item), "skipping comment without text"),
        }
    }
    comments
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
