//! The four projected-metric cards on the overview tab.

use climview_core::{
    BASELINE_YEAR, ProjectedMetrics, RawProjection, Region, TARGET_YEAR, project_raw,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::format::format_signed;
use crate::util::styles::{HEADER_COLOR, HELP_COLOR, severity_color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Temperature,
    Precipitation,
    SeaLevel,
    ExtremeEvents,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Temperature,
        MetricKind::Precipitation,
        MetricKind::SeaLevel,
        MetricKind::ExtremeEvents,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Temperature => "Temperature",
            MetricKind::Precipitation => "Precipitation",
            MetricKind::SeaLevel => "Sea Level",
            MetricKind::ExtremeEvents => "Extreme Events",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::Temperature => "°C",
            MetricKind::Precipitation => "%",
            MetricKind::SeaLevel => " cm",
            MetricKind::ExtremeEvents => "%",
        }
    }

    pub fn formatted<'a>(&self, metrics: &'a ProjectedMetrics) -> &'a str {
        match self {
            MetricKind::Temperature => &metrics.temperature,
            MetricKind::Precipitation => &metrics.precipitation,
            MetricKind::SeaLevel => &metrics.sea_level,
            MetricKind::ExtremeEvents => &metrics.extreme_events,
        }
    }

    pub fn raw(&self, raw: &RawProjection) -> f64 {
        match self {
            MetricKind::Temperature => raw.temperature,
            MetricKind::Precipitation => raw.precipitation,
            MetricKind::SeaLevel => raw.sea_level,
            MetricKind::ExtremeEvents => raw.extreme_events,
        }
    }

    /// Card text, e.g. "+1.6°C"
    pub fn display(&self, metrics: &ProjectedMetrics) -> String {
        format_signed(self.formatted(metrics), self.unit())
    }

    /// Change relative to the global value at the target year.
    ///
    /// Temperature is measured from its 2023 baseline so that the scale
    /// matches the other metrics, which start from zero.
    pub fn severity(&self, raw: &RawProjection, region: Region) -> f64 {
        let global_end = self.raw(&project_raw(TARGET_YEAR, Region::Global));
        let value = self.raw(raw);
        match self {
            MetricKind::Temperature => {
                let baseline = self.raw(&project_raw(BASELINE_YEAR, region));
                let global_baseline = self.raw(&project_raw(BASELINE_YEAR, Region::Global));
                (value - baseline) / (global_end - global_baseline)
            }
            _ => value / global_end,
        }
    }
}

pub struct MetricCards;

impl MetricCards {
    pub fn new() -> Self {
        Self
    }

    fn render_card(frame: &mut Frame, area: Rect, kind: MetricKind, state: &AppState) {
        let color = severity_color(kind.severity(&state.raw, state.selection.region));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", kind.label()),
                Style::default().fg(HEADER_COLOR),
            ));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                kind.display(&state.metrics),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} by {}", state.selection.region, state.selection.year),
                Style::default().fg(HELP_COLOR),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

impl Default for MetricCards {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MetricCards {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        for (row_idx, row) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row);

            for (col_idx, col) in cols.iter().enumerate() {
                let kind = MetricKind::ALL[row_idx * 2 + col_idx];
                Self::render_card(frame, *col, kind, state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use climview_core::project_metrics;

    #[test]
    fn test_display_global_endpoint() {
        let metrics = project_metrics(2050, Region::Global);
        assert_eq!(MetricKind::Temperature.display(&metrics), "+1.6°C");
        assert_eq!(MetricKind::Precipitation.display(&metrics), "+5.3%");
        assert_eq!(MetricKind::SeaLevel.display(&metrics), "+26.3 cm");
        assert_eq!(MetricKind::ExtremeEvents.display(&metrics), "+32.0%");
    }

    #[test]
    fn test_severity_scale() {
        let raw = project_raw(2050, Region::Global);
        for kind in MetricKind::ALL {
            assert!((kind.severity(&raw, Region::Global) - 1.0).abs() < 1e-9);
        }

        let raw = project_raw(2023, Region::Asia);
        for kind in MetricKind::ALL {
            assert!(kind.severity(&raw, Region::Asia).abs() < 1e-9);
        }
    }
}
