//! Data directory storage
//!
//! Directory structure:
//! ~/.climview/
//!   config.yaml          # Last selection and dashboard preferences
//!   keybindings.yaml     # Custom key bindings (optional)
//!   climview.log         # Application log

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use climview_core::{BASELINE_YEAR, Region, RoundingMode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::keybindings_data::KeybindingsConfig;

const CONFIG_FILE: &str = "config.yaml";

/// Simulated latency of the refresh action, in milliseconds
pub const DEFAULT_REFRESH_DELAY_MS: u64 = 1500;

/// Configuration stored in config.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Region selected when the dashboard opens
    pub region: Region,
    /// Target year selected when the dashboard opens
    pub year: i32,
    pub refresh_delay_ms: u64,
    /// How exact ties are rounded in the metric cards
    pub rounding: RoundingMode,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            region: Region::Global,
            year: BASELINE_YEAR,
            refresh_delay_ms: DEFAULT_REFRESH_DELAY_MS,
            rounding: RoundingMode::default(),
        }
    }
}

#[derive(Debug)]
pub enum StorageError {
    /// The state has no data directory to write to
    NoDataDirectory,
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, message: String },
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::NoDataDirectory => write!(f, "no data directory configured"),
            StorageError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            StorageError::Parse { path, message } => {
                write!(f, "invalid YAML in {}: {message}", path.display())
            }
            StorageError::Serialize(msg) => write!(f, "serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Read and parse a YAML file. Returns `Ok(None)` if it does not exist.
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_saphyr::from_str(&content)
        .map(Some)
        .map_err(|e| StorageError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Serialize `value` as YAML and write it to `path`
pub fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let yaml = serde_saphyr::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    fs::write(path, yaml).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Everything read from the data directory at startup
#[derive(Debug)]
pub struct LoadResult {
    pub config: DashboardConfig,
    pub keybindings: KeybindingsConfig,
}

/// Manages the data directory
#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// `~/.climview/`, or `./.climview/` when there is no home directory
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".climview")
    }

    fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|source| StorageError::Io {
            path: self.root.clone(),
            source,
        })
    }

    /// Load the config file, falling back to defaults when it does not exist
    pub fn load_config(&self) -> Result<DashboardConfig, StorageError> {
        Ok(read_yaml(&self.config_path())?.unwrap_or_default())
    }

    pub fn save_config(&self, config: &DashboardConfig) -> Result<(), StorageError> {
        self.init()?;
        write_yaml(&self.config_path(), config)
    }

    /// Load everything the dashboard needs at startup
    pub fn load(&self) -> Result<LoadResult, StorageError> {
        let config = self.load_config()?;
        let keybindings = KeybindingsConfig::load_or_default(&self.root);

        tracing::debug!(
            region = %config.region,
            year = config.year,
            root = %self.root.display(),
            "Loaded dashboard config"
        );

        Ok(LoadResult {
            config,
            keybindings,
        })
    }
}
