use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use video_insights::config::{ForecastConfig, GrowthConfig};
use video_insights::growth::{
    days_active, fit_trend, project_views, EarningsCurveBuilder, EarningsForecast,
    GrowthModeler, GrowthPoint, LinearFit,
};
use video_insights::{CommentRecord, MetricsSnapshot};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

fn point(day: i64, views: u64) -> GrowthPoint {
    GrowthPoint {
        day,
        date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(day),
        views,
        regression_views: views,
    }
}

#[test]
fn two_points_fit_the_line_through_them() {
    let fit = LinearFit::fit(&[(2.0, 100.0), (6.0, 300.0)]).expect("fit");

    assert!((fit.slope - 50.0).abs() < 1e-9);
    assert!(fit.intercept.abs() < 1e-9);
    assert!((fit.predict(2.0) - 100.0).abs() < 1e-9);
    assert!((fit.predict(6.0) - 300.0).abs() < 1e-9);
}

#[test]
fn degenerate_inputs_do_not_fit() {
    assert!(LinearFit::fit(&[]).is_none());
    assert!(LinearFit::fit(&[(3.0, 10.0)]).is_none());
    assert!(LinearFit::fit(&[(4.0, 10.0), (4.0, 90.0), (4.0, 40.0)]).is_none());
}

#[test]
fn fit_trend_falls_back_to_raw_views() {
    let mut single = vec![point(0, 120)];
    assert!(fit_trend(&mut single).is_none());
    assert_eq!(single[0].regression_views, 120);

    let mut same_day = vec![point(5, 10), point(5, 70)];
    assert!(fit_trend(&mut same_day).is_none());
    for p in &same_day {
        assert_eq!(p.regression_views, p.views);
    }
}

#[test]
fn fitted_values_are_floored_at_zero() {
    let mut points = vec![point(0, 100), point(1, 0), point(2, 0)];
    let fit = fit_trend(&mut points).expect("fit");

    assert!(fit.slope < 0.0);
    assert_eq!(points[2].regression_views, 0);
    assert!(points[0].regression_views > 0);
}

#[test]
fn days_active_defaults_and_floors() {
    assert_eq!(days_active(None, now(), 30), 30);
    assert_eq!(days_active(Some(now() - Duration::days(10)), now(), 30), 10);
    assert_eq!(days_active(Some(now() - Duration::hours(3)), now(), 30), 1);
    assert_eq!(days_active(Some(now() + Duration::days(4)), now(), 30), 1);
}

#[test]
fn activity_window_averages_views_over_days_live() {
    let modeler = GrowthModeler::default();

    let dated = MetricsSnapshot::new(3_000, 100, 0).with_published_at(now() - Duration::days(30));
    let window = modeler.activity(&dated, now());
    assert_eq!(window.days_active, 30);
    assert!((window.views_per_day - 100.0).abs() < 1e-9);

    let fresh = MetricsSnapshot::new(500, 0, 0).with_published_at(now() - Duration::hours(2));
    let window = modeler.activity(&fresh, now());
    assert_eq!(window.days_active, 1);
    assert!((window.views_per_day - 500.0).abs() < 1e-9);

    let undated = modeler.activity(&MetricsSnapshot::new(600, 0, 0), now());
    assert_eq!(undated.days_active, 30);
    assert!((undated.views_per_day - 20.0).abs() < 1e-9);
}

#[test]
fn sample_days_are_even_and_unique() {
    let modeler = GrowthModeler::default();

    assert_eq!(modeler.sample_days(30), vec![0, 3, 7, 10, 13, 17, 20, 23, 27, 30]);
    assert_eq!(modeler.sample_days(1), vec![0, 1]);
    assert_eq!(modeler.sample_days(4), vec![0, 1, 2, 3, 4]);
    assert!(modeler.sample_days(0).is_empty());
}

#[test]
fn series_without_comments_is_linear() {
    let modeler = GrowthModeler::default();
    let stats = MetricsSnapshot::new(3_000, 100, 0).with_published_at(now() - Duration::days(30));

    let series = modeler.build_series(&stats, &[], now());

    assert_eq!(series.points.len(), 10);
    for p in &series.points {
        assert_eq!(p.views, 100 * p.day as u64);
        assert_eq!(p.regression_views, p.views);
    }
    let fit = series.fit.expect("linear series fits");
    assert!((fit.slope - 100.0).abs() < 1e-6);
}

#[test]
fn series_with_comments_is_non_decreasing() {
    let modeler = GrowthModeler::default();
    let published = now() - Duration::days(30);
    let stats = MetricsSnapshot::new(50_000, 2_000, 6).with_published_at(published);
    let comments = vec![
        CommentRecord::posted_at("first day", published + Duration::hours(5)),
        CommentRecord::posted_at("first day again", published + Duration::hours(20)),
        CommentRecord::posted_at("early", published + Duration::days(2)),
        CommentRecord::new("no timestamp"),
        CommentRecord::posted_at("later", published + Duration::days(18)),
        CommentRecord::posted_at("recent", published + Duration::days(29)),
    ];

    let series = modeler.build_series(&stats, &comments, now());

    assert!(!series.points.is_empty());
    for pair in series.points.windows(2) {
        assert!(pair[1].views >= pair[0].views, "{:?}", pair);
    }
    assert_eq!(series.points.first().map(|p| p.views), Some(0));
    assert_eq!(series.points.last().map(|p| p.views), Some(50_000));
}

#[test]
fn comment_weighting_uses_fixed_split() {
    let modeler = GrowthModeler::default();
    let origin = now() - Duration::days(10);
    // every comment lands on day 1, so from day 1 on the viral share is complete
    let times = vec![origin + Duration::hours(30); 4];

    let points = modeler.reconstruct(10_000, 10, origin, &times);

    let day_two = points.iter().find(|p| p.day == 2).expect("day 2 sampled");
    // 0.2 * 2/10 + 0.8 * 1.0
    assert_eq!(day_two.views, 8_400);
    let day_one = points.iter().find(|p| p.day == 1).expect("day 1 sampled");
    // comments at 1.25 days are not yet posted on day 1
    assert_eq!(day_one.views, 200);
}

#[test]
fn zero_views_yield_empty_series() {
    let modeler = GrowthModeler::default();
    let stats = MetricsSnapshot::new(0, 0, 0);

    let series = modeler.build_series(&stats, &[CommentRecord::posted_at("hi", now())], now());

    assert!(series.points.is_empty());
    assert!(series.fit.is_none());
}

#[test]
fn dates_start_at_publication() {
    let modeler = GrowthModeler::default();
    let published = Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap();
    let stats = MetricsSnapshot::new(1_000, 0, 0).with_published_at(published);

    let series = modeler.build_series(&stats, &[], now());

    assert_eq!(series.points[0].date, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
    let last = series.points.last().unwrap();
    assert_eq!(last.date, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap() + Duration::days(last.day));
}

#[test]
fn sample_count_follows_config() {
    let modeler = GrowthModeler::new(GrowthConfig {
        sample_points: 4,
        ..GrowthConfig::default()
    });
    assert_eq!(modeler.sample_days(30), vec![0, 10, 20, 30]);
}

#[test]
fn view_projection_uses_flat_uplift() {
    let forecast = project_views(&MetricsSnapshot::new(100_000, 5_000, 1_000));
    assert_eq!(forecast.views_7d, 105_000);
    assert_eq!(forecast.views_30d, 125_000);
    assert_eq!(forecast.likes_7d, 5_250);
    assert_eq!(forecast.likes_30d, 6_250);
    assert_eq!(forecast.growth_trend, "Increasing");

    assert_eq!(project_views(&MetricsSnapshot::new(900, 10, 1)).growth_trend, "Stable");
}

#[test]
fn earnings_forecast_scales_daily_rate() {
    let forecast = EarningsForecast::from_rate(1_000.0, 4.95);
    assert!((forecast.daily - 4.95).abs() < 1e-9);
    assert!((forecast.weekly - 34.65).abs() < 1e-9);
    assert!((forecast.monthly - 148.5).abs() < 1e-9);
}

#[test]
fn earnings_curves_are_seeded_and_bounded() {
    let builder = EarningsCurveBuilder::default();
    let stats = MetricsSnapshot::new(30_000, 900, 80);
    let views_per_day = 1_000.0;
    let rpm = 5.0;
    let per_day_revenue = views_per_day * rpm / 1000.0;

    let first = builder.build(&stats, views_per_day, rpm, 150.0, now());
    let second = builder.build(&stats, views_per_day, rpm, 150.0, now());

    assert_eq!(first.history_7d, second.history_7d);
    assert_eq!(first.history_1y, second.history_1y);
    assert_eq!(first.history_7d.len(), 7);
    assert_eq!(first.history_30d.len(), 30);
    assert_eq!(first.history_1y.len(), 12);

    for p in first.history_7d.iter().chain(first.history_30d.iter()) {
        assert!(p.earnings >= per_day_revenue * 0.9 * 0.85 - 0.01);
        assert!(p.earnings <= per_day_revenue * 1.15 + 0.01);
    }
    for p in &first.history_1y {
        assert!(p.earnings <= per_day_revenue * 30.0 * 1.15 + 0.01);
    }
    assert_eq!(first.history_7d.last().unwrap().date, "2025-03-01");
    assert_eq!(first.history_1y.last().unwrap().date, "2025-03");
}

#[test]
fn different_seeds_draw_different_curves() {
    let stats = MetricsSnapshot::new(30_000, 900, 80);
    let a = EarningsCurveBuilder::new(ForecastConfig {
        seed: Some(1),
        ..ForecastConfig::default()
    });
    let b = EarningsCurveBuilder::new(ForecastConfig {
        seed: Some(2),
        ..ForecastConfig::default()
    });

    let left = a.build(&stats, 1_000.0, 5.0, 150.0, now());
    let right = b.build(&stats, 1_000.0, 5.0, 150.0, now());

    assert_ne!(left.history_30d, right.history_30d);
}

#[test]
fn flat_curves_without_variance_follow_the_trend() {
    let builder = EarningsCurveBuilder::new(ForecastConfig {
        seed: Some(7),
        variance: 0.0,
        trend_strength: 0.1,
    });
    let stats = MetricsSnapshot::new(30_000, 900, 80);

    let curves = builder.build(&stats, 1_000.0, 5.0, 150.0, now());

    assert!((curves.history_7d[0].earnings - 4.5).abs() < 1e-9);
    assert!((curves.history_7d[6].earnings - 5.0).abs() < 1e-9);
    for pair in curves.history_30d.windows(2) {
        assert!(pair[1].earnings >= pair[0].earnings);
    }
}

#[test]
fn progression_history_ends_at_totals() {
    let builder = EarningsCurveBuilder::default();
    let stats = MetricsSnapshot::new(13_000, 0, 0);

    let curves = builder.build(&stats, 100.0, 3.0, 39.0, now());

    assert_eq!(curves.history.len(), 7);
    assert!((999..=1_000).contains(&curves.history[0].views));
    assert_eq!(curves.history[0].date, "2024-12-31");
    let last = curves.history.last().unwrap();
    assert_eq!(last.views, 13_000);
    assert!((last.earnings - 39.0).abs() < 1e-9);
    assert_eq!(last.date, "2025-03-01");
}
