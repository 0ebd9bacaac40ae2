//! Synthetic daily view history.
//!
//! True per-day views are not available, so the curve is reconstructed from
//! the only time-indexed signal we have: when comments were posted. The
//! default 0.2 organic / 0.8 comment-velocity split is a heuristic
//! approximation, not a measured model.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::GrowthConfig;
use crate::growth::regression::LinearFit;
use crate::input::{CommentRecord, MetricsSnapshot};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthPoint {
    pub day: i64,
    pub date: NaiveDate,
    pub views: u64,
    #[serde(rename = "regression")]
    pub regression_views: u64,
}

#[derive(Debug, Clone)]
pub struct GrowthSeries {
    pub points: Vec<GrowthPoint>,
    pub fit: Option<LinearFit>,
}

/// How long a video has been live and its average daily views over that span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityWindow {
    pub days_active: i64,
    pub views_per_day: f64,
}

/// Whole days since publication, never below 1. Without a publish date the
/// configured default window is assumed.
pub fn days_active(published_at: Option<DateTime<Utc>>, now: DateTime<Utc>, default_days: i64) -> i64 {
    match published_at {
        Some(published_at) => (now - published_at).num_days().max(1),
        None => default_days.max(1),
    }
}

#[derive(Debug, Clone)]
pub struct GrowthModeler {
    config: GrowthConfig,
}

impl Default for GrowthModeler {
    fn default() -> Self {
        Self::new(GrowthConfig::default())
    }
}

impl GrowthModeler {
    pub fn new(config: GrowthConfig) -> Self {
        Self { config }
    }

    pub fn activity(&self, stats: &MetricsSnapshot, now: DateTime<Utc>) -> ActivityWindow {
        let days = days_active(stats.published_at, now, self.config.default_days_active);
        ActivityWindow {
            days_active: days,
            views_per_day: stats.view_count as f64 / days as f64,
        }
    }

    /// Evenly spaced day offsets in `[0, total_days]`, deduplicated, in order.
    pub fn sample_days(&self, total_days: i64) -> Vec<i64> {
        if total_days <= 0 {
            return Vec::new();
        }
        let samples = self.config.sample_points.max(2);
        let step = total_days as f64 / (samples - 1) as f64;

        let mut days: Vec<i64> = (0..samples)
            .map(|idx| (idx as f64 * step).round() as i64)
            .collect();
        days.dedup();
        days
    }

    /// Raw reconstructed views per sampled day. `regression_views` mirrors
    /// `views` until [`fit_trend`] runs.
    pub fn reconstruct(
        &self,
        total_views: u64,
        total_days: i64,
        origin: DateTime<Utc>,
        comment_times: &[DateTime<Utc>],
    ) -> Vec<GrowthPoint> {
        if total_views == 0 || total_days <= 0 {
            return Vec::new();
        }

        let mut offsets: Vec<f64> = comment_times
            .iter()
            .map(|posted| (*posted - origin).num_seconds() as f64 / 86_400.0)
            .collect();
        offsets.sort_by(|a, b| a.total_cmp(b));
        let comment_total = offsets.len() as f64;

        self.sample_days(total_days)
            .into_iter()
            .map(|day| {
                let organic = day as f64 / total_days as f64;
                let weight = if offsets.is_empty() {
                    organic
                } else {
                    let before = offsets.partition_point(|offset| *offset <= day as f64) as f64;
                    self.config.organic_weight * organic
                        + self.config.viral_weight * (before / comment_total)
                };
                let views = (total_views as f64 * weight.clamp(0.0, 1.0)).round() as u64;
                GrowthPoint {
                    day,
                    date: (origin + Duration::days(day)).date_naive(),
                    views,
                    regression_views: views,
                }
            })
            .collect()
    }

    /// Reconstructs the series for a video and overlays the fitted trend.
    pub fn build_series(
        &self,
        stats: &MetricsSnapshot,
        comments: &[CommentRecord],
        now: DateTime<Utc>,
    ) -> GrowthSeries {
        let total_days = self.activity(stats, now).days_active;
        let origin = stats
            .published_at
            .unwrap_or_else(|| now - Duration::days(total_days));

        let comment_times: Vec<DateTime<Utc>> =
            comments.iter().filter_map(|comment| comment.published_at).collect();

        let mut points = self.reconstruct(stats.view_count, total_days, origin, &comment_times);
        let fit = fit_trend(&mut points);
        debug!(
            points = points.len(),
            timed_comments = comment_times.len(),
            days_active = total_days,
            fitted = fit.is_some(),
            "growth series reconstructed"
        );

        GrowthSeries { points, fit }
    }
}

/// Fits `views ~ day` and writes the fitted values, floored at 0, into
/// `regression_views`. Degenerate inputs leave the raw values in place.
pub fn fit_trend(points: &mut [GrowthPoint]) -> Option<LinearFit> {
    let samples: Vec<(f64, f64)> = points
        .iter()
        .map(|point| (point.day as f64, point.views as f64))
        .collect();
    let fit = LinearFit::fit(&samples)?;

    for point in points.iter_mut() {
        point.regression_views = fit.predict(point.day as f64).round().max(0.0) as u64;
    }
    Some(fit)
}
