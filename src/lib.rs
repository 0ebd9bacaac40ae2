pub mod api;
pub mod config;
pub mod error;
pub mod growth;
pub mod input;
pub mod scoring;
pub mod text;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::api::{AnalysisRequest, EarningsResponse, PredictionResponse};
use crate::config::AnalyticsConfig;
use crate::growth::{project_views, EarningsCurveBuilder, EarningsForecast, GrowthModeler};
use crate::scoring::{compose_recommendations, EngagementScorer};
use crate::text::{ClassificationSummary, TextClassifier};

pub use crate::error::{AnalyticsError, Result};
pub use crate::input::{CommentRecord, MetricsSnapshot, SentimentAggregate};

const CURRENCY: &str = "USD";
const CONFIDENT_COMMENT_COUNT: usize = 10;
const HIGH_CONFIDENCE: u8 = 85;
const BASE_CONFIDENCE: u8 = 60;

/// The four models wired to one configuration.
#[derive(Debug, Clone)]
pub struct Analyzer {
    scorer: EngagementScorer,
    modeler: GrowthModeler,
    curves: EarningsCurveBuilder,
    classifier: TextClassifier,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(&AnalyticsConfig::default())
    }
}

impl Analyzer {
    pub fn new(config: &AnalyticsConfig) -> Self {
        Self {
            scorer: EngagementScorer::new(config.engagement.clone()),
            modeler: GrowthModeler::new(config.growth.clone()),
            curves: EarningsCurveBuilder::new(config.forecast.clone()),
            classifier: TextClassifier::new(config.classifier.clone()),
        }
    }

    /// Monetization estimate plus the illustrative revenue curves.
    pub fn earnings(&self, request: &AnalysisRequest, now: DateTime<Utc>) -> EarningsResponse {
        let sentiment = request.sentiment.as_ref();
        let engagement = self.scorer.score(&request.stats, sentiment);

        let activity = self.modeler.activity(&request.stats, now);

        let curves = self.curves.build(
            &request.stats,
            activity.views_per_day,
            engagement.estimated_rpm,
            engagement.total_earnings,
            now,
        );
        debug!(
            cpm = engagement.estimated_cpm,
            rpm = engagement.estimated_rpm,
            days_active = activity.days_active,
            "earnings estimated"
        );

        let confidence_score = if request.comments.len() > CONFIDENT_COMMENT_COUNT {
            HIGH_CONFIDENCE
        } else {
            BASE_CONFIDENCE
        };

        EarningsResponse {
            estimated_cpm: engagement.estimated_cpm,
            estimated_rpm: engagement.estimated_rpm,
            total_earnings: round_to(engagement.total_earnings, 2),
            forecast: EarningsForecast::from_rate(
                activity.views_per_day,
                engagement.estimated_rpm,
            ),
            curves,
            currency: CURRENCY.to_string(),
            confidence_score,
        }
    }

    /// Virality score, projections, advice and the fitted growth chart.
    pub fn predict(&self, request: &AnalysisRequest, now: DateTime<Utc>) -> PredictionResponse {
        let sentiment = request.sentiment.as_ref();
        let virality_score = self.scorer.virality_score(&request.stats, sentiment);
        let series = self
            .modeler
            .build_series(&request.stats, &request.comments, now);
        let recommendations = compose_recommendations(virality_score, sentiment);
        debug!(virality_score, recommendations = recommendations.len(), "prediction composed");

        PredictionResponse {
            virality_score,
            forecast: project_views(&request.stats),
            recommendations,
            chart_data: series.points,
            analysis_timestamp: request.timestamp.clone(),
        }
    }

    pub fn classify_comments<S: AsRef<str>>(
        &self,
        comments: &[S],
        include_details: bool,
    ) -> ClassificationSummary {
        self.classifier.summarize(comments, include_details)
    }
}

pub fn round_to(value: f64, digits: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
