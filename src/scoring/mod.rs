pub mod engagement;
pub mod recommendations;

pub use engagement::{EngagementResult, EngagementScorer};
pub use recommendations::compose_recommendations;
