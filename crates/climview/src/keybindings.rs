//! Loading, saving and matching configurable keybindings.

use std::path::{Path, PathBuf};

use crate::data::keybindings_data::KeybindingsConfig;
use crate::data::storage::{StorageError, read_yaml, write_yaml};
use crate::event::AppKeyEvent;

const KEYBINDINGS_FILE: &str = "keybindings.yaml";

impl KeybindingsConfig {
    /// Check if `key` matches any of `bindings` (case-insensitive).
    pub fn matches(key: &AppKeyEvent, bindings: &[String]) -> bool {
        key.binding_name()
            .is_some_and(|name| bindings.iter().any(|b| b.eq_ignore_ascii_case(&name)))
    }

    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(KEYBINDINGS_FILE)
    }

    /// Read keybindings.yaml from `data_dir`.
    ///
    /// A missing file yields the defaults; an unreadable or invalid one is
    /// logged and also yields the defaults.
    pub fn load_or_default(data_dir: &Path) -> Self {
        match read_yaml(&Self::path(data_dir)) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("Using default keybindings: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), StorageError> {
        write_yaml(&Self::path(data_dir), self)
    }
}
