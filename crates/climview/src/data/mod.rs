//! Persisted dashboard preferences and keybindings.

pub mod keybindings_data;
pub mod storage;
