use serde::{Deserialize, Serialize};

/// Unformatted projection values for one (year, region) pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawProjection {
    /// Temperature change (°C)
    pub temperature: f64,
    /// Precipitation change (%)
    pub precipitation: f64,
    /// Sea level rise (cm)
    pub sea_level: f64,
    /// Change in extreme-event frequency (%)
    pub extreme_events: f64,
}

/// Projection values formatted with one fractional digit.
///
/// Units and sign prefixes are left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectedMetrics {
    pub temperature: String,
    pub precipitation: String,
    pub sea_level: String,
    pub extreme_events: String,
}
