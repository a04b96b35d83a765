//! Chart components for the trends tab.

mod co2;
mod temperature;

pub use co2::render_co2_chart;
pub use temperature::{TemperatureChartData, render_temperature_chart};
