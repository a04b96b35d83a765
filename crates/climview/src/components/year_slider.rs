use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::LineGauge,
};

use super::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, YEAR_FAST_STEP, YEAR_MAX, YEAR_MIN};
use crate::util::styles::block_with_help;

/// Range control for the target year, bounded to [YEAR_MIN, YEAR_MAX].
pub struct YearSlider;

impl YearSlider {
    pub fn new() -> Self {
        Self
    }

    /// Position of `year` within the slider range, 0.0 to 1.0
    pub fn ratio(year: i32) -> f64 {
        let span = f64::from(YEAR_MAX - YEAR_MIN);
        (f64::from(year - YEAR_MIN) / span).clamp(0.0, 1.0)
    }
}

impl Default for YearSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for YearSlider {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let bindings = &state.keybindings.selection;

        // Fast bindings are checked first: "shift+right" must not fall through to "right"
        let delta = if KeybindingsConfig::matches(key, &bindings.year_up_fast) {
            YEAR_FAST_STEP
        } else if KeybindingsConfig::matches(key, &bindings.year_down_fast) {
            -YEAR_FAST_STEP
        } else if KeybindingsConfig::matches(key, &bindings.year_up) {
            1
        } else if KeybindingsConfig::matches(key, &bindings.year_down) {
            -1
        } else if KeybindingsConfig::matches(key, &bindings.first_year) {
            state.set_year(YEAR_MIN);
            return EventResult::Handled;
        } else if KeybindingsConfig::matches(key, &bindings.last_year) {
            state.set_year(YEAR_MAX);
            return EventResult::Handled;
        } else {
            return EventResult::NotHandled;
        };

        state.step_year(delta);
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let year = state.selection.year;
        let gauge = LineGauge::default()
            .block(block_with_help(
                &format!(" Target year: {year} "),
                &format!("{YEAR_MIN} ◀ h/l ▶ {YEAR_MAX}"),
            ))
            .filled_style(Style::default().fg(Color::Cyan))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .label(format!("{year}"))
            .ratio(Self::ratio(year));

        frame.render_widget(gauge, area);
    }
}
