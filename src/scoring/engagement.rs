use serde::Serialize;
use std::f64::consts::FRAC_PI_2;

use crate::config::EngagementConfig;
use crate::input::{MetricsSnapshot, SentimentAggregate};
use crate::round_to;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementResult {
    pub virality_score: f64,
    pub estimated_cpm: f64,
    pub estimated_rpm: f64,
    pub total_earnings: f64,
}

#[derive(Debug, Clone)]
pub struct EngagementScorer {
    config: EngagementConfig,
}

impl Default for EngagementScorer {
    fn default() -> Self {
        Self::new(EngagementConfig::default())
    }
}

impl EngagementScorer {
    pub fn new(config: EngagementConfig) -> Self {
        Self { config }
    }

    /// Bounded `[0, 100]` popularity index, one decimal.
    ///
    /// The weighted engagement ratio is unbounded, so it is squashed with
    /// `atan`: near-linear for typical videos, saturating at 100 for outliers.
    pub fn virality_score(
        &self,
        stats: &MetricsSnapshot,
        sentiment: Option<&SentimentAggregate>,
    ) -> f64 {
        if stats.view_count == 0 {
            return 0.0;
        }

        let weighted = stats.like_count as f64 * self.config.likes_weight
            + stats.comment_count as f64 * self.config.comments_weight;
        let engagement_ratio = weighted / stats.view_count as f64 * 100.0;

        let booster = sentiment.map_or(1.0, |sentiment| {
            1.0 + sentiment.positive_ratio() - sentiment.negative_ratio() / 2.0
        });

        let raw = engagement_ratio * booster;
        let score = ((raw / 10.0).atan() / FRAC_PI_2 * 100.0).clamp(0.0, 100.0);
        round_to(score, 1)
    }

    /// Ad revenue per 1000 impressions, clamped to the configured band.
    /// Zero views short-circuit to 0 rather than the band floor.
    pub fn estimate_cpm(
        &self,
        stats: &MetricsSnapshot,
        sentiment: Option<&SentimentAggregate>,
    ) -> f64 {
        if stats.view_count == 0 {
            return 0.0;
        }

        let engagement_rate = (stats.like_count as f64 + stats.comment_count as f64)
            / stats.view_count as f64;
        let engagement_booster =
            (1.0 + engagement_rate * 50.0).min(self.config.max_engagement_booster);
        let sentiment_booster =
            sentiment.map_or(1.0, |sentiment| 0.8 + sentiment.positive_ratio() * 0.4);

        let cpm = self.config.base_cpm * engagement_booster * sentiment_booster;
        round_to(cpm.clamp(self.config.min_cpm, self.config.max_cpm), 2)
    }

    /// Creator's share of the CPM.
    pub fn estimate_rpm(&self, cpm: f64) -> f64 {
        round_to(cpm * self.config.creator_share, 2)
    }

    pub fn score(
        &self,
        stats: &MetricsSnapshot,
        sentiment: Option<&SentimentAggregate>,
    ) -> EngagementResult {
        let virality_score = self.virality_score(stats, sentiment);
        let estimated_cpm = self.estimate_cpm(stats, sentiment);
        let estimated_rpm = self.estimate_rpm(estimated_cpm);
        let total_earnings = stats.view_count as f64 / 1000.0 * estimated_rpm;

        EngagementResult {
            virality_score,
            estimated_cpm,
            estimated_rpm,
            total_earnings,
        }
    }
}
