use climview_core::co2_series;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::{Screen, handle_selection_key};
use crate::components::charts::{
    TemperatureChartData, render_co2_chart, render_temperature_chart,
};
use crate::components::{
    Component, EventResult, region_list::RegionList, year_slider::YearSlider,
};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::focused_block;

/// Temperature trend and CO2 concentration charts.
///
/// The selection keys stay live here so the projected path can be moved
/// without switching back to the overview.
pub struct TrendsScreen {
    region_list: RegionList,
    year_slider: YearSlider,
}

impl TrendsScreen {
    pub fn new() -> Self {
        Self {
            region_list: RegionList::new(),
            year_slider: YearSlider::new(),
        }
    }
}

impl Default for TrendsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TrendsScreen {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        handle_selection_key(&mut self.region_list, &mut self.year_slider, key, state)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Percentage(55),
                Constraint::Min(0),
            ])
            .split(area);

        self.year_slider.render(frame, rows[0], state);

        let region = state.selection.region;
        let data = TemperatureChartData::build(&state.historical, region, state.selection.year);
        render_temperature_chart(
            frame,
            rows[1],
            focused_block(&format!(" Temperature anomaly: {region} "), false),
            &data,
        );

        render_co2_chart(
            frame,
            rows[2],
            focused_block(" Atmospheric CO2 (ppm) ", false),
            co2_series(),
        );
    }
}

impl Screen for TrendsScreen {
    fn title(&self) -> &str {
        "Trends"
    }
}
