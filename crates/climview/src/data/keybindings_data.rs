//! Keybindings configuration data structures.
//!
//! Defines the structure for customizable keyboard shortcuts that can be
//! serialized to/from `~/.climview/keybindings.yaml`.

use serde::{Deserialize, Serialize};

/// Root keybindings configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Global keybindings (work everywhere)
    pub global: GlobalBindings,
    /// Region and year selection
    pub selection: SelectionBindings,
}

/// Global keybindings that work everywhere in the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
    pub save: Vec<String>,
    pub cancel: Vec<String>,
    pub refresh: Vec<String>,
    pub next_tab: Vec<String>,
    pub tab_1: Vec<String>,
    pub tab_2: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into(), "ctrl+c".into()],
            save: vec!["ctrl+s".into()],
            cancel: vec!["esc".into()],
            refresh: vec!["r".into()],
            next_tab: vec!["tab".into()],
            tab_1: vec!["1".into()],
            tab_2: vec!["2".into()],
        }
    }
}

/// Keybindings for moving the region and year selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionBindings {
    pub next_region: Vec<String>,
    pub prev_region: Vec<String>,
    pub year_up: Vec<String>,
    pub year_down: Vec<String>,
    pub year_up_fast: Vec<String>,
    pub year_down_fast: Vec<String>,
    pub first_year: Vec<String>,
    pub last_year: Vec<String>,
}

impl Default for SelectionBindings {
    fn default() -> Self {
        Self {
            next_region: vec!["j".into(), "down".into()],
            prev_region: vec!["k".into(), "up".into()],
            year_up: vec!["l".into(), "right".into()],
            year_down: vec!["h".into(), "left".into()],
            year_up_fast: vec!["shift+l".into(), "shift+right".into()],
            year_down_fast: vec!["shift+h".into(), "shift+left".into()],
            first_year: vec!["home".into()],
            last_year: vec!["end".into()],
        }
    }
}
