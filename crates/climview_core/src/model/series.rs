use serde::{Deserialize, Serialize};

/// Global temperature deviation (°C) for a given year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub year: i32,
    pub temperature: f64,
}

/// Atmospheric CO2 concentration (ppm) for a given year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Co2Point {
    pub year: i32,
    pub level: f64,
}

/// Unscaled historical series, 1900 to 2050
pub const BASE_HISTORICAL: [HistoricalPoint; 7] = [
    HistoricalPoint { year: 1900, temperature: 0.0 },
    HistoricalPoint { year: 1950, temperature: 0.2 },
    HistoricalPoint { year: 1980, temperature: 0.5 },
    HistoricalPoint { year: 2000, temperature: 0.8 },
    HistoricalPoint { year: 2023, temperature: 1.1 },
    HistoricalPoint { year: 2030, temperature: 1.3 },
    HistoricalPoint { year: 2050, temperature: 1.6 },
];

pub const CO2_LEVELS: [Co2Point; 7] = [
    Co2Point { year: 1900, level: 296.0 },
    Co2Point { year: 1950, level: 311.0 },
    Co2Point { year: 1980, level: 339.0 },
    Co2Point { year: 2000, level: 369.0 },
    Co2Point { year: 2023, level: 419.0 },
    Co2Point { year: 2030, level: 440.0 },
    Co2Point { year: 2050, level: 480.0 },
];
