//! Quota usage meter with color bands.

#[cfg(test)]
#[path = "usage_meter_test.rs"]
mod usage_meter_test;

use leptos::prelude::*;

/// Visual band for the meter fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsageBand {
    Ok,
    Warning,
    Critical,
}

impl UsageBand {
    pub fn class(self) -> &'static str {
        match self {
            UsageBand::Ok => "usage-meter__fill usage-meter__fill--ok",
            UsageBand::Warning => "usage-meter__fill usage-meter__fill--warning",
            UsageBand::Critical => "usage-meter__fill usage-meter__fill--critical",
        }
    }
}

/// Requests used as a percentage of the limit. Unclamped, so an over-quota
/// period reads above 100; a zero limit reads 0.
pub fn usage_percentage(used: u64, limit: u64) -> f64 {
    if limit == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    {
        used as f64 / limit as f64 * 100.0
    }
}

/// Fill width for the meter, clamped to the track.
pub fn meter_width(percentage: f64) -> f64 {
    percentage.clamp(0.0, 100.0)
}

/// Band thresholds: above 90 critical, above 75 warning.
pub fn usage_band(percentage: f64) -> UsageBand {
    if percentage > 90.0 {
        UsageBand::Critical
    } else if percentage > 75.0 {
        UsageBand::Warning
    } else {
        UsageBand::Ok
    }
}

/// Horizontal meter showing requests used against the period limit.
#[component]
pub fn UsageMeter(used: u64, limit: u64) -> impl IntoView {
    let percentage = usage_percentage(used, limit);

    view! {
        <div class="usage-meter">
            <div class="usage-meter__labels">
                <span>"Requests Used"</span>
                <span>{format!("{used} / {limit}")}</span>
            </div>
            <div class="usage-meter__track">
                <div
                    class=usage_band(percentage).class()
                    style:width=format!("{}%", meter_width(percentage))
                ></div>
            </div>
        </div>
    }
}
