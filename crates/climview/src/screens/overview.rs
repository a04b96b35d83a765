//! Overview tab: region picker, year control and the projected metric cards.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::{Screen, handle_selection_key};
use crate::components::{
    Component, EventResult, metric_cards::MetricCards, region_list::RegionList,
    year_slider::YearSlider,
};
use crate::event::AppKeyEvent;
use crate::state::AppState;

pub struct OverviewScreen {
    region_list: RegionList,
    year_slider: YearSlider,
    metric_cards: MetricCards,
}

impl OverviewScreen {
    pub fn new() -> Self {
        Self {
            region_list: RegionList::new(),
            year_slider: YearSlider::new(),
            metric_cards: MetricCards::new(),
        }
    }
}

impl Default for OverviewScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for OverviewScreen {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        handle_selection_key(&mut self.region_list, &mut self.year_slider, key, state)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(0)])
            .split(area);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(columns[1]);

        self.region_list.render(frame, columns[0], state);
        self.year_slider.render(frame, right[0], state);
        self.metric_cards.render(frame, right[1], state);
    }
}

impl Screen for OverviewScreen {
    fn title(&self) -> &str {
        "Overview"
    }
}
