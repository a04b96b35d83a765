use std::path::PathBuf;
use std::time::Duration;

use climview_core::{
    BASELINE_YEAR, HistoricalPoint, ProjectedMetrics, RawProjection, Region, RoundingMode,
    TARGET_YEAR, historical_series, project_metrics_with, project_raw,
};
use jiff::Timestamp;

use crate::data::keybindings_data::KeybindingsConfig;
use crate::data::storage::{DashboardConfig, DataDirectory, StorageError};

use super::TabId;

/// Lowest year the year control accepts
pub const YEAR_MIN: i32 = BASELINE_YEAR;
/// Highest year the year control accepts
pub const YEAR_MAX: i32 = TARGET_YEAR;
/// Step used by the fast year keys
pub const YEAR_FAST_STEP: i32 = 5;

/// Status of the refresh task
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RefreshStatus {
    #[default]
    Idle,
    Refreshing {
        started: Timestamp,
    },
    Failed(String),
}

/// The two pieces of interactive state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub region: Region,
    pub year: i32,
}

#[derive(Debug)]
pub struct AppState {
    pub active_tab: TabId,
    pub selection: Selection,

    /// Derived from `selection`; rebuilt by `recompute`
    pub metrics: ProjectedMetrics,
    pub raw: RawProjection,
    pub historical: Vec<HistoricalPoint>,

    pub rounding: RoundingMode,
    pub refresh_delay: Duration,
    pub refresh_status: RefreshStatus,
    pub last_refreshed: Option<Timestamp>,

    pub keybindings: KeybindingsConfig,
    pub data_dir: Option<PathBuf>,

    pub error_message: Option<String>,
    pub info_message: Option<String>,
    /// Selection differs from the saved config
    pub dirty: bool,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(DashboardConfig::default(), KeybindingsConfig::default(), None)
    }
}

impl AppState {
    pub fn from_config(
        config: DashboardConfig,
        keybindings: KeybindingsConfig,
        data_dir: Option<PathBuf>,
    ) -> Self {
        let mut state = Self {
            active_tab: TabId::default(),
            selection: Selection {
                region: config.region,
                year: clamp_year(config.year),
            },
            metrics: ProjectedMetrics::default(),
            raw: RawProjection::default(),
            historical: Vec::new(),
            rounding: config.rounding,
            refresh_delay: Duration::from_millis(config.refresh_delay_ms),
            refresh_status: RefreshStatus::Idle,
            last_refreshed: None,
            keybindings,
            data_dir,
            error_message: None,
            info_message: None,
            dirty: false,
            exit: false,
        };
        state.recompute();
        state
    }

    /// Load state from the config and keybindings in `data_dir`
    pub fn load_from_data_dir(data_dir: PathBuf) -> Result<Self, StorageError> {
        let storage = DataDirectory::new(data_dir.clone());
        let loaded = storage.load()?;
        Ok(Self::from_config(
            loaded.config,
            loaded.keybindings,
            Some(data_dir),
        ))
    }

    pub fn to_config(&self) -> DashboardConfig {
        DashboardConfig {
            region: self.selection.region,
            year: self.selection.year,
            refresh_delay_ms: self.refresh_delay.as_millis() as u64,
            rounding: self.rounding,
        }
    }

    /// Persist the current selection and preferences
    pub fn save(&mut self) -> Result<(), StorageError> {
        let Some(data_dir) = &self.data_dir else {
            return Err(StorageError::NoDataDirectory);
        };
        DataDirectory::new(data_dir.clone()).save_config(&self.to_config())?;
        self.dirty = false;
        tracing::info!(
            region = %self.selection.region,
            year = self.selection.year,
            "Saved dashboard config"
        );
        Ok(())
    }

    /// Rebuild every value derived from the selection
    pub fn recompute(&mut self) {
        let Selection { region, year } = self.selection;
        self.raw = project_raw(year, region);
        self.metrics = project_metrics_with(year, region, self.rounding);
        self.historical = historical_series(region);
        tracing::trace!(%region, year, metrics = ?self.metrics, "Recomputed projections");
    }

    pub fn select_region(&mut self, region: Region) {
        if self.selection.region == region {
            return;
        }
        self.selection.region = region;
        self.mark_modified();
        self.recompute();
    }

    pub fn next_region(&mut self) {
        self.select_region(self.selection.region.next());
    }

    pub fn prev_region(&mut self) {
        self.select_region(self.selection.region.prev());
    }

    /// Set the target year, clamped to the year control's range
    pub fn set_year(&mut self, year: i32) {
        let year = clamp_year(year);
        if self.selection.year == year {
            return;
        }
        self.selection.year = year;
        self.mark_modified();
        self.recompute();
    }

    pub fn step_year(&mut self, delta: i32) {
        self.set_year(self.selection.year.saturating_add(delta));
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn is_refreshing(&self) -> bool {
        matches!(self.refresh_status, RefreshStatus::Refreshing { .. })
    }

    pub fn begin_refresh(&mut self, started: Timestamp) {
        self.refresh_status = RefreshStatus::Refreshing { started };
        self.info_message = None;
    }

    pub fn finish_refresh(&mut self, finished_at: Timestamp) {
        self.refresh_status = RefreshStatus::Idle;
        self.last_refreshed = Some(finished_at);
        self.recompute();
    }

    pub fn cancel_refresh(&mut self) {
        self.refresh_status = RefreshStatus::Idle;
        self.info_message = Some("Refresh cancelled".to_string());
    }

    pub fn fail_refresh(&mut self, reason: String) {
        self.set_error(format!("Refresh failed: {reason}"));
        self.refresh_status = RefreshStatus::Failed(reason);
    }

    /// Record an unsaved selection change; stale notices no longer apply
    pub fn mark_modified(&mut self) {
        self.dirty = true;
        self.info_message = None;
    }

    pub fn set_error(&mut self, msg: String) {
        tracing::error!("{msg}");
        self.error_message = Some(msg);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
        self.info_message = None;
        if matches!(self.refresh_status, RefreshStatus::Failed(_)) {
            self.refresh_status = RefreshStatus::Idle;
        }
    }
}

pub fn clamp_year(year: i32) -> i32 {
    year.clamp(YEAR_MIN, YEAR_MAX)
}
