//! Regional temperature trend chart.
//!
//! Draws the region-scaled historical series as a line and overlays the
//! yearly projected path from the baseline up to the selected year.

use climview_core::{BASELINE_YEAR, HistoricalPoint, Region, projected_path};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Block, Chart, Dataset, GraphType},
};

use crate::util::format::format_degrees;

/// Points and bounds for the temperature chart
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureChartData {
    pub historical: Vec<(f64, f64)>,
    pub projected: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl TemperatureChartData {
    pub fn build(historical: &[HistoricalPoint], region: Region, year: i32) -> Self {
        let historical: Vec<(f64, f64)> = historical
            .iter()
            .map(|p| (f64::from(p.year), p.temperature))
            .collect();
        let projected: Vec<(f64, f64)> = projected_path(region, BASELINE_YEAR, year)
            .into_iter()
            .map(|(y, t)| (f64::from(y), t))
            .collect();

        let all = historical.iter().chain(projected.iter());
        let x_min = all.clone().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let x_max = all.clone().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        let y_min = all.clone().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let y_max = all.map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

        let (x_bounds, y_bounds) = if x_min.is_finite() && y_min.is_finite() {
            let padding = (y_max - y_min).abs().max(0.5) * 0.1;
            ([x_min, x_max], [(y_min - padding).min(0.0), y_max + padding])
        } else {
            ([0.0, 1.0], [0.0, 1.0])
        };

        Self {
            historical,
            projected,
            x_bounds,
            y_bounds,
        }
    }
}

pub fn render_temperature_chart(frame: &mut Frame, area: Rect, block: Block, data: &TemperatureChartData) {
    let mut datasets = vec![
        Dataset::default()
            .name("historical")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&data.historical),
    ];
    if data.projected.len() > 1 {
        datasets.push(
            Dataset::default()
                .name("projected")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Yellow))
                .data(&data.projected),
        );
    }

    let [x_min, x_max] = data.x_bounds;
    let [y_min, y_max] = data.y_bounds;

    let x_labels = vec![
        Span::raw(format!("{:.0}", x_min)),
        Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
        Span::raw(format!("{:.0}", x_max)),
    ];
    let y_labels = vec![
        Span::raw(format_degrees(y_min)),
        Span::raw(format_degrees((y_min + y_max) / 2.0)),
        Span::raw(format_degrees(y_max)),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Year".dark_gray())
                .bounds(data.x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Δ°C".dark_gray())
                .bounds(data.y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use climview_core::historical_series;

    #[test]
    fn test_build_bounds_cover_series() {
        let series = historical_series(Region::Africa);
        let data = TemperatureChartData::build(&series, Region::Africa, 2040);

        assert_eq!(data.historical.len(), 7);
        assert_eq!(data.projected.len(), 18);
        assert_eq!(data.x_bounds, [1900.0, 2050.0]);
        for (_, t) in data.historical.iter().chain(data.projected.iter()) {
            assert!(*t >= data.y_bounds[0] && *t <= data.y_bounds[1]);
        }
    }

    #[test]
    fn test_projected_path_follows_selected_year() {
        let series = historical_series(Region::Global);
        let data = TemperatureChartData::build(&series, Region::Global, BASELINE_YEAR);
        assert_eq!(data.projected.len(), 1);
        assert_eq!(data.projected[0], (2023.0, 1.1));
    }
}
