use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use jiff::Timestamp;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::screens::{Screen, overview::OverviewScreen, trends::TrendsScreen};
use crate::state::{AppState, TabId};
use crate::worker::{RefreshResponse, RefreshWorker};

/// How long the event loop waits for input before polling the worker
const TICK_RATE: Duration = Duration::from_millis(50);

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    overview_screen: OverviewScreen,
    trends_screen: TrendsScreen,
    worker: RefreshWorker,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::from_state(AppState::default())
    }

    /// Create app with a data directory path
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        let state = match AppState::load_from_data_dir(data_dir.clone()) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(
                    path = %data_dir.display(),
                    "Failed to load dashboard config, starting with defaults: {e}"
                );
                let mut state = AppState::default();
                state.data_dir = Some(data_dir);
                state
            }
        };
        Self::from_state(state)
    }

    pub fn from_state(state: AppState) -> Self {
        Self {
            state,
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            overview_screen: OverviewScreen::new(),
            trends_screen: TrendsScreen::new(),
            worker: RefreshWorker::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(
            region = %self.state.selection.region,
            year = self.state.selection.year,
            "Dashboard started"
        );

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
            self.process_worker_responses();
        }

        if self.state.dirty {
            tracing::info!("Exiting with unsaved selection changes");
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Overview => self.overview_screen.render(frame, area, &self.state),
            TabId::Trends => self.trends_screen.render(frame, area, &self.state),
        }
    }

    fn active_screen_title(&self) -> &str {
        match self.state.active_tab {
            TabId::Overview => self.overview_screen.title(),
            TabId::Trends => self.trends_screen.title(),
        }
    }

    fn handle_events(&mut self) -> std::io::Result<()> {
        if !event::poll(TICK_RATE)? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key(AppKeyEvent::from(key_event))
            }
            _ => {}
        }
        Ok(())
    }

    /// Apply any outcome the refresh worker has reported
    pub fn process_worker_responses(&mut self) {
        while let Some(response) = self.worker.try_recv() {
            self.apply_refresh_response(response);
        }
    }

    fn apply_refresh_response(&mut self, response: RefreshResponse) {
        match response {
            RefreshResponse::Completed { finished_at, .. } => {
                self.state.finish_refresh(finished_at)
            }
            RefreshResponse::Cancelled => self.state.cancel_refresh(),
            RefreshResponse::Failed(reason) => self.state.fail_refresh(reason),
        }
    }

    /// Wait up to `timeout` for the in-flight refresh to report back
    pub fn wait_for_refresh(&mut self, timeout: Duration) -> bool {
        match self.worker.recv_timeout(timeout) {
            Some(response) => {
                self.apply_refresh_response(response);
                true
            }
            None => false,
        }
    }

    fn start_refresh(&mut self) {
        if self.state.is_refreshing() {
            tracing::debug!("Refresh requested while one is running");
            return;
        }
        if self.worker.refresh(self.state.refresh_delay) {
            self.state.begin_refresh(Timestamp::now());
        }
    }

    fn save(&mut self) {
        match self.state.save() {
            Ok(()) => self.state.info_message = Some("Saved".to_string()),
            Err(e) => self.state.set_error(format!("Failed to save: {e}")),
        }
    }

    pub fn handle_key(&mut self, key: AppKeyEvent) {
        let global = &self.state.keybindings.global;

        if KeybindingsConfig::matches(&key, &global.quit) {
            self.state.exit = true;
            return;
        }
        if KeybindingsConfig::matches(&key, &global.save) {
            self.save();
            return;
        }
        if KeybindingsConfig::matches(&key, &global.refresh) {
            self.start_refresh();
            return;
        }
        if KeybindingsConfig::matches(&key, &global.cancel) {
            if self.state.is_refreshing() {
                self.worker.cancel();
            } else {
                self.state.clear_error();
            }
            return;
        }

        let result = self.tab_bar.handle_key(&key, &mut self.state);
        if result != EventResult::NotHandled {
            tracing::debug!(screen = self.active_screen_title(), "Switched tab");
            return;
        }

        let result = match self.state.active_tab {
            TabId::Overview => self.overview_screen.handle_key(&key, &mut self.state),
            TabId::Trends => self.trends_screen.handle_key(&key, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }
}
