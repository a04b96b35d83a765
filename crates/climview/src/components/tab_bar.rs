use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Tabs},
};

use super::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, TabId};
use crate::util::styles::{FOCUS_COLOR, HEADER_COLOR, HELP_COLOR};

/// Tab strip with the current selection summarised in its title.
pub struct TabBar;

impl TabBar {
    pub fn new() -> Self {
        Self
    }

    fn target_tab(key: &AppKeyEvent, state: &AppState) -> Option<TabId> {
        let global = &state.keybindings.global;
        [
            (&global.tab_1, TabId::Overview),
            (&global.tab_2, TabId::Trends),
            (&global.next_tab, state.active_tab.next()),
        ]
        .into_iter()
        .find(|(bindings, _)| KeybindingsConfig::matches(key, bindings))
        .map(|(_, tab)| tab)
    }

    fn title(state: &AppState) -> Line<'static> {
        Line::from(vec![
            " climview ".fg(HEADER_COLOR).bold(),
            format!(
                "{} · {} ",
                state.selection.region, state.selection.year
            )
            .fg(HELP_COLOR),
        ])
    }
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TabBar {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        match Self::target_tab(key, state) {
            Some(tab) => {
                state.switch_tab(tab);
                EventResult::Handled
            }
            None => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles = TabId::ALL
            .iter()
            .enumerate()
            .map(|(idx, tab)| format!("[{}] {}", idx + 1, tab.name()));

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .title(Self::title(state)),
            )
            .select(state.active_tab.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(FOCUS_COLOR)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}
