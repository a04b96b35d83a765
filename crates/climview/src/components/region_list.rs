use climview_core::Region;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};

use super::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::focused_block;

/// Selectable list of every region with its temperature multiplier.
pub struct RegionList {
    list_state: ListState,
}

impl RegionList {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }
}

impl Default for RegionList {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for RegionList {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let bindings = &state.keybindings.selection;
        if KeybindingsConfig::matches(key, &bindings.next_region) {
            state.next_region();
            EventResult::Handled
        } else if KeybindingsConfig::matches(key, &bindings.prev_region) {
            state.prev_region();
            EventResult::Handled
        } else {
            EventResult::NotHandled
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = Region::ALL
            .iter()
            .map(|region| {
                let factor = region.factors().temperature;
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<14}", region.name())),
                    Span::styled(
                        format!("×{factor:.2}"),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        self.list_state.select(Some(state.selection.region.index()));

        let list = List::new(items)
            .block(focused_block(" Region ", true))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}
