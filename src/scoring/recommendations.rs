use crate::input::SentimentAggregate;

pub const HIGH_VIRAL_POTENTIAL: &str =
    "🔥 High Viral Potential: This video is blowing up! Consider a 'Part 2' immediately.";
pub const STRONG_MOMENTUM: &str =
    "📈 Strong Momentum: Engagement is high. Try to engage more in the comments to boost the algorithm.";
pub const CONTENT_WARNING: &str =
    "⚠️ Content Warning: High negative sentiment detected. Check comments for potential controversy.";
pub const FAN_FAVORITE: &str =
    "🌟 Fan Favorite: The audience loves this content style. Double down on this niche.";
pub const STEADY_GROWTH: &str =
    "📊 Steady Growth: Keep consistent with your upload schedule to build more momentum.";

const HIGH_VIRALITY: f64 = 70.0;
const MOMENTUM: f64 = 40.0;
const NEGATIVE_SHARE: f64 = 0.3;
const JOY_SHARE: f64 = 0.4;

/// Advisory messages, virality first, then sentiment, then the fallback.
///
/// At most one virality message and one sentiment message are emitted; the
/// steady-growth fallback only appears when neither fired.
pub fn compose_recommendations(
    virality_score: f64,
    sentiment: Option<&SentimentAggregate>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if virality_score > HIGH_VIRALITY {
        recommendations.push(HIGH_VIRAL_POTENTIAL.to_string());
    } else if virality_score > MOMENTUM {
        recommendations.push(STRONG_MOMENTUM.to_string());
    }

    if let Some(sentiment) = sentiment {
        if sentiment.negative_ratio() > NEGATIVE_SHARE {
            recommendations.push(CONTENT_WARNING.to_string());
        } else if sentiment.joy_ratio() > JOY_SHARE {
            recommendations.push(FAN_FAVORITE.to_string());
        }
    }

    if recommendations.is_empty() {
        recommendations.push(STEADY_GROWTH.to_string());
    }

    recommendations
}
