//! Dashboard behaviour tests
//!
//! Tests are organized by topic:
//! - `selection` - Region and year selection, clamping and derived values
//! - `refresh` - Refresh status transitions on the state
//! - `app_keys` - Key dispatch through the app shell and the refresh worker
//! - `persistence` - Saving and reloading the selection

mod app_keys;
