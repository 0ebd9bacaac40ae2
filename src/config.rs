use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AnalyticsError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementConfig {
    pub likes_weight: f64,
    pub comments_weight: f64,
    pub base_cpm: f64,
    pub min_cpm: f64,
    pub max_cpm: f64,
    pub max_engagement_booster: f64,
    pub creator_share: f64,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            likes_weight: 2.0,
            comments_weight: 5.0,
            base_cpm: 4.50,
            min_cpm: 2.0,
            max_cpm: 15.0,
            max_engagement_booster: 2.0,
            creator_share: 0.55,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    pub sample_points: usize,
    pub default_days_active: i64,
    pub organic_weight: f64,
    pub viral_weight: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            sample_points: 10,
            default_days_active: 30,
            organic_weight: 0.2,
            viral_weight: 0.8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Fixed seed for the display curves; derived from the input when unset.
    pub seed: Option<u64>,
    pub variance: f64,
    pub trend_strength: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            seed: None,
            variance: 0.15,
            trend_strength: 0.1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub polarity_threshold: f64,
    pub caps_ratio: f64,
    pub caps_min_len: usize,
    pub repeat_run: usize,
    pub spam_examples: usize,
    pub spam_example_chars: usize,
    pub topic_limit: usize,
    pub topic_min_len: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            polarity_threshold: 0.05,
            caps_ratio: 0.7,
            caps_min_len: 10,
            repeat_run: 6,
            spam_examples: 5,
            spam_example_chars: 100,
            topic_limit: 10,
            topic_min_len: 4,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub engagement: EngagementConfig,
    pub growth: GrowthConfig,
    pub forecast: ForecastConfig,
    pub classifier: ClassifierConfig,
}

impl AnalyticsConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| AnalyticsError::Config(format!("failed to read config: {}", err)))?;
                toml::from_str(&contents)
                    .map_err(|err| AnalyticsError::Config(format!("failed to parse config: {}", err)))?
            }
            _ => AnalyticsConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|err| {
                    AnalyticsError::Config(format!("failed to create config dir: {}", err))
                })?;
            }
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| AnalyticsError::Config(format!("failed to serialize config: {}", err)))?;
        std::fs::write(path, payload)
            .map_err(|err| AnalyticsError::Config(format!("failed to write config: {}", err)))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Applies `INSIGHTS_*` overrides from `lookup`. Values that fail to
    /// parse or fall outside their valid range are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) =
            lookup("INSIGHTS_BASE_CPM").and_then(|v| v.trim().parse::<f64>().ok())
        {
            if value.is_finite() && value > 0.0 {
                self.engagement.base_cpm = value;
            }
        }
        if let Some(value) =
            lookup("INSIGHTS_CREATOR_SHARE").and_then(|v| v.trim().parse::<f64>().ok())
        {
            if value.is_finite() {
                self.engagement.creator_share = value.clamp(0.0, 1.0);
            }
        }
        if let Some(value) =
            lookup("INSIGHTS_SAMPLE_POINTS").and_then(|v| v.trim().parse::<usize>().ok())
        {
            self.growth.sample_points = value.max(2);
        }
        if let Some(value) =
            lookup("INSIGHTS_FORECAST_SEED").and_then(|v| v.trim().parse::<u64>().ok())
        {
            self.forecast.seed = Some(value);
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("INSIGHTS_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/insights.toml")))
}
