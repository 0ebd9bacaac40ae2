use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{AnalyticsError, Result};
use crate::growth::{EarningsCurves, EarningsForecast, GrowthPoint, ViewForecast};
use crate::input::{
    coerce_comment, coerce_comments, coerce_sentiment, value_kind, CommentRecord,
    MetricsSnapshot, SentimentAggregate,
};

/// Payload shared by the earnings and prediction entry points.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub stats: MetricsSnapshot,
    pub sentiment: Option<SentimentAggregate>,
    pub comments: Vec<CommentRecord>,
    pub timestamp: Option<String>,
}

impl AnalysisRequest {
    pub fn from_json(raw: &str) -> Result<Self> {
        Self::from_value(parse_document(raw)?)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(object) = value else {
            return Err(AnalyticsError::InvalidShape(format!(
                "expected a JSON object, got {}",
                value_kind(&value)
            )));
        };

        let stats = match object.get("stats") {
            Some(stats @ Value::Object(_)) => MetricsSnapshot::from_value(stats),
            _ => {
                return Err(AnalyticsError::InvalidShape(
                    "Video statistics are required".to_string(),
                ))
            }
        };

        Ok(Self {
            stats,
            sentiment: coerce_sentiment(object.get("sentiment")),
            comments: coerce_comments(object.get("comments")),
            timestamp: object
                .get("timestamp")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}

/// Bare array of comments for the classifier. Entries without text are
/// skipped; they are not counted in the summary total.
pub fn parse_comment_batch(raw: &str) -> Result<Vec<String>> {
    let value = parse_document(raw)?;
    let Value::Array(items) = value else {
        return Err(AnalyticsError::InvalidShape(format!(
            "expected a JSON array of comments, got {}",
            value_kind(&value)
        )));
    };

    let mut comments = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match coerce_comment(item) {
            Some(comment) => comments.push(comment.text),
            None => warn!(index, kind = value_kind(item), "skipping comment without text"),
        }
    }
    Ok(comments)
}

fn parse_document(raw: &str) -> Result<Value> {
    if raw.trim().is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }
    Ok(serde_json::from_str(raw)?)
}

#[derive(Debug, Clone, Serialize)]
pub struct EarningsResponse {
    pub estimated_cpm: f64,
    pub estimated_rpm: f64,
    pub total_earnings: f64,
    pub forecast: EarningsForecast,
    #[serde(flatten)]
    pub curves: EarningsCurves,
    pub currency: String,
    pub confidence_score: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub virality_score: f64,
    pub forecast: ViewForecast,
    pub recommendations: Vec<String>,
    pub chart_data: Vec<GrowthPoint>,
    pub analysis_timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&AnalyticsError> for ErrorResponse {
    fn from(err: &AnalyticsError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
