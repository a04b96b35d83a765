use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::{AppState, RefreshStatus, TabId};
use crate::util::styles::HELP_COLOR;
use jiff::Timestamp;
use jiff::tz::TimeZone;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text(state: &AppState) -> &'static str {
        if state.is_refreshing() {
            return "esc: cancel refresh | q: quit";
        }
        match state.active_tab {
            TabId::Overview => {
                "1-2: tabs | j/k: region | h/l: year | H/L: year ±5 | r: refresh | ctrl+s: save | q: quit"
            }
            TabId::Trends => "1-2: tabs | j/k: region | h/l: year | r: refresh | q: quit",
        }
    }

    fn refresh_span(state: &AppState) -> Span<'static> {
        match &state.refresh_status {
            RefreshStatus::Refreshing { .. } => {
                Span::styled("Refreshing… ", Style::default().fg(Color::Yellow))
            }
            RefreshStatus::Failed(_) => {
                Span::styled("Refresh failed ", Style::default().fg(Color::Red))
            }
            RefreshStatus::Idle => match state.last_refreshed {
                Some(ts) => Span::styled(
                    format!("Updated {} ", format_clock(ts)),
                    Style::default().fg(Color::Green),
                ),
                None => Span::raw(""),
            },
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

/// Local wall-clock time of a timestamp, e.g. "14:03:27"
pub fn format_clock(ts: Timestamp) -> String {
    ts.to_zoned(TimeZone::system()).strftime("%H:%M:%S").to_string()
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut spans = vec![Self::refresh_span(state)];
        if state.dirty {
            spans.push(Span::styled("[unsaved] ", Style::default().fg(Color::Yellow)));
        }

        if let Some(error) = &state.error_message {
            spans.push(Span::styled("Error: ", Style::default().fg(Color::Red)));
            spans.push(Span::raw(error.clone()));
        } else if let Some(info) = &state.info_message {
            spans.push(Span::styled(info.clone(), Style::default().fg(Color::Cyan)));
        } else {
            spans.push(Span::styled(
                Self::get_help_text(state),
                Style::default().fg(HELP_COLOR),
            ));
        }

        let paragraph =
            Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_text_while_refreshing() {
        let mut state = AppState::default();
        assert!(StatusBar::get_help_text(&state).contains("r: refresh"));

        state.begin_refresh(Timestamp::UNIX_EPOCH);
        assert!(StatusBar::get_help_text(&state).contains("cancel refresh"));
    }

    #[test]
    fn test_refresh_span_reports_failure() {
        let mut state = AppState::default();
        state.fail_refresh("offline".to_string());
        assert_eq!(StatusBar::refresh_span(&state).content, "Refresh failed ");
    }
}
