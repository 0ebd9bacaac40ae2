//! Forward-looking figures: simple view/like projections and illustrative
//! earnings curves.
//!
//! Nothing here is fitted. The per-bucket curves are jittered with a seeded
//! RNG for display; the fitted trend lives in `growth::series`.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

use crate::config::ForecastConfig;
use crate::input::MetricsSnapshot;
use crate::round_to;

const GROWTH_7D: f64 = 1.05;
const GROWTH_30D: f64 = 1.25;
const TRENDING_VIEWS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewForecast {
    pub views_7d: u64,
    pub views_30d: u64,
    pub likes_7d: u64,
    pub likes_30d: u64,
    pub growth_trend: String,
}

/// Flat 5% weekly / 25% monthly uplift on the current counters.
pub fn project_views(stats: &MetricsSnapshot) -> ViewForecast {
    let scale = |value: u64, factor: f64| (value as f64 * factor).floor() as u64;
    let growth_trend = if stats.view_count > TRENDING_VIEWS {
        "Increasing"
    } else {
        "Stable"
    };

    ViewForecast {
        views_7d: scale(stats.view_count, GROWTH_7D),
        views_30d: scale(stats.view_count, GROWTH_30D),
        likes_7d: scale(stats.like_count, GROWTH_7D),
        likes_30d: scale(stats.like_count, GROWTH_30D),
        growth_trend: growth_trend.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarningsForecast {
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
}

impl EarningsForecast {
    pub fn from_rate(views_per_day: f64, rpm: f64) -> Self {
        let per_day = views_per_day * (rpm / 1000.0);
        Self {
            daily: round_to(per_day, 2),
            weekly: round_to(per_day * 7.0, 2),
            monthly: round_to(per_day * 30.0, 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarningsPoint {
    pub date: String,
    pub earnings: f64,
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarningsCurves {
    pub history: Vec<EarningsPoint>,
    pub history_7d: Vec<EarningsPoint>,
    pub history_30d: Vec<EarningsPoint>,
    pub history_1y: Vec<EarningsPoint>,
}

#[derive(Debug, Clone, Copy)]
struct Bucketing {
    count: usize,
    days: i64,
    date_format: &'static str,
}

const WEEK: Bucketing = Bucketing {
    count: 7,
    days: 1,
    date_format: "%Y-%m-%d",
};
const MONTH: Bucketing = Bucketing {
    count: 30,
    days: 1,
    date_format: "%Y-%m-%d",
};
const YEAR: Bucketing = Bucketing {
    count: 12,
    days: 30,
    date_format: "%Y-%m",
};

#[derive(Debug, Clone)]
pub struct EarningsCurveBuilder {
    config: ForecastConfig,
}

impl Default for EarningsCurveBuilder {
    fn default() -> Self {
        Self::new(ForecastConfig::default())
    }
}

impl EarningsCurveBuilder {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    pub fn seed_for(&self, stats: &MetricsSnapshot) -> u64 {
        self.config.seed.unwrap_or_else(|| derive_seed(stats))
    }

    pub fn build(
        &self,
        stats: &MetricsSnapshot,
        views_per_day: f64,
        rpm: f64,
        total_earnings: f64,
        now: DateTime<Utc>,
    ) -> EarningsCurves {
        let mut rng = StdRng::seed_from_u64(self.seed_for(stats));
        let per_day_revenue = views_per_day * (rpm / 1000.0);

        EarningsCurves {
            history: progression_history(total_earnings, stats.view_count, now),
            history_7d: self.jittered(&mut rng, WEEK, per_day_revenue, views_per_day, now),
            history_30d: self.jittered(&mut rng, MONTH, per_day_revenue, views_per_day, now),
            history_1y: self.jittered(&mut rng, YEAR, per_day_revenue, views_per_day, now),
        }
    }

    fn jittered(
        &self,
        rng: &mut StdRng,
        bucketing: Bucketing,
        per_day_revenue: f64,
        views_per_day: f64,
        now: DateTime<Utc>,
    ) -> Vec<EarningsPoint> {
        let variance = self.config.variance.clamp(0.0, 0.99);
        let last = bucketing.count.saturating_sub(1);

        (0..bucketing.count)
            .map(|idx| {
                let jitter = if variance > 0.0 {
                    rng.gen_range(1.0 - variance..=1.0 + variance)
                } else {
                    1.0
                };
                let trend = self.trend(idx, last);
                let factor = bucketing.days as f64 * jitter * trend;
                let age = (last - idx) as i64 * bucketing.days;

                EarningsPoint {
                    date: (now - Duration::days(age))
                        .format(bucketing.date_format)
                        .to_string(),
                    earnings: round_to(per_day_revenue * factor, 2),
                    views: (views_per_day * factor).round().max(0.0) as u64,
                }
            })
            .collect()
    }

    /// Mild ramp from `1 - trend_strength` (oldest) to 1.0 (latest).
    fn trend(&self, idx: usize, last: usize) -> f64 {
        if last == 0 {
            return 1.0;
        }
        let age = (last - idx) as f64 / last as f64;
        1.0 - self.config.trend_strength * age
    }
}

/// Seven checkpoints ten days apart, ramping from 1/13 of the current totals
/// up to the full totals today.
fn progression_history(total_earnings: f64, views: u64, now: DateTime<Utc>) -> Vec<EarningsPoint> {
    (0..=12)
        .rev()
        .step_by(2)
        .map(|idx: i64| {
            let progression = (13 - idx) as f64 / 13.0;
            EarningsPoint {
                date: (now - Duration::days(idx * 5)).format("%Y-%m-%d").to_string(),
                earnings: round_to(total_earnings * progression, 2),
                views: (views as f64 * progression).floor() as u64,
            }
        })
        .collect()
}

/// Stable seed from the counters, so identical input draws identical curves.
pub fn derive_seed(stats: &MetricsSnapshot) -> u64 {
    use sha2::{Digest, Sha256};

    let payload = format!(
        "{}:{}:{}:{}",
        stats.view_count,
        stats.like_count,
        stats.comment_count,
        stats
            .published_at
            .map(|published| published.timestamp())
            .unwrap_or_default()
    );
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}
