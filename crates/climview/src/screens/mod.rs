pub mod overview;
pub mod trends;

use crate::components::{Component, EventResult};
use crate::components::{region_list::RegionList, year_slider::YearSlider};
use crate::event::AppKeyEvent;
use crate::state::AppState;

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}

/// Region and year keys shared by every screen
pub(crate) fn handle_selection_key(
    region_list: &mut RegionList,
    year_slider: &mut YearSlider,
    key: &AppKeyEvent,
    state: &mut AppState,
) -> EventResult {
    match region_list.handle_key(key, state) {
        EventResult::NotHandled => year_slider.handle_key(key, state),
        result => result,
    }
}
