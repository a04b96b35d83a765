use serde::{Deserialize, Serialize};

use super::Region;

/// Per-region multipliers applied to the global projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionalFactors {
    pub temperature: f64,
    pub precipitation: f64,
    pub sea_level: f64,
    pub extreme_events: f64,
}

impl RegionalFactors {
    const fn new(temperature: f64, precipitation: f64, sea_level: f64, extreme_events: f64) -> Self {
        Self {
            temperature,
            precipitation,
            sea_level,
            extreme_events,
        }
    }
}

impl Region {
    /// Static factor record for this region.
    pub fn factors(&self) -> RegionalFactors {
        match self {
            Region::Global => RegionalFactors::new(1.0, 1.0, 1.0, 1.0),
            Region::NorthAmerica => RegionalFactors::new(1.2, 0.9, 1.1, 1.3),
            Region::SouthAmerica => RegionalFactors::new(1.1, 1.2, 1.0, 1.2),
            Region::Europe => RegionalFactors::new(1.15, 0.8, 0.9, 1.1),
            Region::Africa => RegionalFactors::new(1.4, 0.7, 0.8, 1.5),
            Region::Asia => RegionalFactors::new(1.3, 1.4, 1.2, 1.4),
            Region::Oceania => RegionalFactors::new(1.1, 0.85, 1.3, 1.2),
        }
    }
}
