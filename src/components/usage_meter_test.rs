use super::*;

#[test]
fn percentage_is_used_over_limit() {
    let pct = usage_percentage(9_500, 10_000);
    assert!((pct - 95.0).abs() < f64::EPSILON);
}

#[test]
fn percentage_with_zero_limit_is_zero() {
    assert!(usage_percentage(500, 0).abs() < f64::EPSILON);
}

#[test]
fn width_clamps_over_quota_to_the_track() {
    let pct = usage_percentage(12_000, 10_000);
    assert!(pct > 100.0);
    assert!((meter_width(pct) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn ninety_five_percent_is_critical() {
    assert_eq!(usage_band(usage_percentage(9_500, 10_000)), UsageBand::Critical);
}

#[test]
fn band_boundaries() {
    assert_eq!(usage_band(75.0), UsageBand::Ok);
    assert_eq!(usage_band(75.1), UsageBand::Warning);
    assert_eq!(usage_band(90.0), UsageBand::Warning);
    assert_eq!(usage_band(90.1), UsageBand::Critical);
    assert_eq!(usage_band(0.0), UsageBand::Ok);
}

#[test]
fn band_maps_to_fill_class() {
    assert_eq!(UsageBand::Ok.class(), "usage-meter__fill usage-meter__fill--ok");
    assert_eq!(
        UsageBand::Critical.class(),
        "usage-meter__fill usage-meter__fill--critical"
    );
}
