//! Region-scaled series for the trend charts.

use crate::format::round_to;
use crate::model::{BASE_HISTORICAL, CO2_LEVELS, Co2Point, HistoricalPoint, Region};
use crate::projection::project_raw;

/// Historical temperature series scaled by the region's temperature factor,
/// rounded to two decimals.
pub fn historical_series(region: Region) -> Vec<HistoricalPoint> {
    let factor = region.factors().temperature;
    BASE_HISTORICAL
        .iter()
        .map(|point| HistoricalPoint {
            year: point.year,
            temperature: round_to(point.temperature * factor, 2),
        })
        .collect()
}

/// Static CO2 concentration series. Identical for every region.
pub fn co2_series() -> &'static [Co2Point] {
    &CO2_LEVELS
}

/// Raw projected temperature for each year in `from..=to`.
pub fn projected_path(region: Region, from: i32, to: i32) -> Vec<(i32, f64)> {
    (from..=to)
        .map(|year| (year, project_raw(year, region).temperature))
        .collect()
}
