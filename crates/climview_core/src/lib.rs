//! Regional climate projection library
//!
//! This crate provides the pure model behind the climview dashboard.
//! It supports:
//! - A closed set of regions, each with fixed climate multipliers
//! - Linear projections of temperature, precipitation, sea level and
//!   extreme-event frequency between a 2023 baseline and a 2050 endpoint
//! - Region-scaled historical temperature series and a static CO2 series
//! - Fixed-digit decimal formatting with a pinned rounding rule
//!
//! # Example
//!
//! ```
//! use climview_core::{Region, project_metrics};
//!
//! let metrics = project_metrics(2050, Region::Global);
//! assert_eq!(metrics.temperature, "1.6");
//! assert_eq!(metrics.extreme_events, "32.0");
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod format;
pub mod historical;
pub mod projection;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::ParseRegionError;
pub use format::{RoundingMode, format_fixed, round_to};
pub use historical::{co2_series, historical_series, projected_path};
pub use model::{
    Co2Point, HistoricalPoint, ProjectedMetrics, RawProjection, Region, RegionalFactors,
};
pub use projection::{
    BASELINE_YEAR, TARGET_YEAR, project_metrics, project_metrics_with, project_raw,
};
