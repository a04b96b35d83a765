//! Tests for the climview projection model
//!
//! Tests are organized by topic:
//! - `regions` - Region set, parsing and factor table
//! - `projection` - Metric projector values, monotonicity and extrapolation
//! - `historical` - Region-scaled historical series, CO2 series, projected path

mod regions;
