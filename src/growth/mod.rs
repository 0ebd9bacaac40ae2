pub mod forecast;
pub mod regression;
pub mod series;

pub use forecast::{
    project_views, EarningsCurveBuilder, EarningsCurves, EarningsForecast, EarningsPoint,
    ViewForecast,
};
pub use regression::LinearFit;
pub use series::{
    days_active, fit_trend, ActivityWindow, GrowthModeler, GrowthPoint, GrowthSeries,
};
