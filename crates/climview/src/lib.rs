//! Terminal dashboard for regional climate projections.
//!
//! Pick a region and a target year between 2023 and 2050 to see projected
//! temperature, precipitation, sea level and extreme-event changes, plus
//! historical temperature and CO2 trends.

// ============================================================================
// Application shell
// ============================================================================

pub mod app;
pub mod components;
pub mod screens;
pub mod state;

// ============================================================================
// Input, persistence and background work
// ============================================================================

pub mod data;
pub mod event;
pub mod keybindings;
pub mod logging;
pub mod util;
pub mod worker;

#[cfg(test)]
mod tests;

pub use app::App;
pub use logging::init_logging;
