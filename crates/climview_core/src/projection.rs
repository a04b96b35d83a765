//! Linear projection of regional climate metrics.
//!
//! Each metric is interpolated between its value in [`BASELINE_YEAR`] and
//! [`TARGET_YEAR`], then scaled by the region's factor. Years outside that
//! window extrapolate along the same line; nothing is clamped.

use crate::format::{RoundingMode, format_fixed};
use crate::model::{ProjectedMetrics, RawProjection, Region};

pub const BASELINE_YEAR: i32 = 2023;
pub const TARGET_YEAR: i32 = 2050;

const BASELINE_TEMPERATURE: f64 = 1.1;
const TARGET_TEMPERATURE: f64 = 1.6;
const TARGET_PRECIPITATION: f64 = 5.3;
const TARGET_SEA_LEVEL: f64 = 26.3;
const TARGET_EXTREME_EVENTS: f64 = 32.0;

/// Unformatted projection for `year` in `region`.
///
/// Arithmetic is evaluated as `(diff * delta) / span` to keep results
/// identical to the published dashboard figures.
pub fn project_raw(year: i32, region: Region) -> RawProjection {
    let year_diff = f64::from(year) - f64::from(BASELINE_YEAR);
    let span = f64::from(TARGET_YEAR - BASELINE_YEAR);

    let temperature =
        BASELINE_TEMPERATURE + year_diff * (TARGET_TEMPERATURE - BASELINE_TEMPERATURE) / span;
    let precipitation = year_diff * TARGET_PRECIPITATION / span;
    let sea_level = year_diff * TARGET_SEA_LEVEL / span;
    let extreme_events = year_diff * TARGET_EXTREME_EVENTS / span;

    let factors = region.factors();
    RawProjection {
        temperature: temperature * factors.temperature,
        precipitation: precipitation * factors.precipitation,
        sea_level: sea_level * factors.sea_level,
        extreme_events: extreme_events * factors.extreme_events,
    }
}

/// Projected metrics formatted with one fractional digit.
pub fn project_metrics(year: i32, region: Region) -> ProjectedMetrics {
    project_metrics_with(year, region, RoundingMode::default())
}

pub fn project_metrics_with(year: i32, region: Region, mode: RoundingMode) -> ProjectedMetrics {
    let raw = project_raw(year, region);
    ProjectedMetrics {
        temperature: format_fixed(raw.temperature, 1, mode),
        precipitation: format_fixed(raw.precipitation, 1, mode),
        sea_level: format_fixed(raw.sea_level, 1, mode),
        extreme_events: format_fixed(raw.extreme_events, 1, mode),
    }
}
