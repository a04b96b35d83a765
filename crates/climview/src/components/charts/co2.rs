use climview_core::Co2Point;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block},
};

use crate::util::format::format_ppm;

/// Pre-industrial reference used as the bar baseline, so differences between
/// years are visible at terminal resolution.
const BAR_FLOOR_PPM: f64 = 280.0;

fn bar_value(level: f64) -> u64 {
    (level - BAR_FLOOR_PPM).max(0.0).round() as u64
}

/// Render the CO2 concentration series as a bar chart.
pub fn render_co2_chart(frame: &mut Frame, area: Rect, block: Block, series: &[Co2Point]) {
    let inner_width = block.inner(area).width as usize;
    let bar_width = (inner_width / series.len().max(1)).saturating_sub(1).clamp(3, 9) as u16;

    let bars: Vec<Bar> = series
        .iter()
        .map(|point| {
            let style = if point.level >= 400.0 {
                Style::default().fg(Color::Red)
            } else if point.level >= 350.0 {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Green)
            };
            Bar::default()
                .value(bar_value(point.level))
                .label(Line::from(point.year.to_string()))
                .text_value(format!("{:.0}", point.level))
                .style(style)
                .value_style(style.reversed())
        })
        .collect();

    let chart = BarChart::default()
        .block(block.title_bottom(Line::from(format!(
            " above {} ",
            format_ppm(BAR_FLOOR_PPM)
        ))))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_value_offsets_floor() {
        assert_eq!(bar_value(419.0), 139);
        assert_eq!(bar_value(280.0), 0);
        assert_eq!(bar_value(250.0), 0);
    }
}
