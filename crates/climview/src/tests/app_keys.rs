//! Key dispatch tests
//!
//! Drive the app shell with key events the way the event loop does, using a
//! short refresh delay so worker round-trips stay fast.

use std::time::Duration;

use climview_core::Region;

use crate::App;
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::{AppState, RefreshStatus, TabId, YEAR_MAX, YEAR_MIN};

const WAIT: Duration = Duration::from_secs(5);

fn app_with_delay(delay: Duration) -> App {
    let mut state = AppState::default();
    state.refresh_delay = delay;
    App::from_state(state)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(AppKeyEvent::plain(code));
}

#[test]
fn test_quit_keys() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.state().exit);

    let mut app = App::new();
    app.handle_key(AppKeyEvent::with_ctrl(KeyCode::Char('c')));
    assert!(app.state().exit);
}

#[test]
fn test_tab_switching() {
    let mut app = App::new();
    assert_eq!(app.state().active_tab, TabId::Overview);

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.state().active_tab, TabId::Trends);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().active_tab, TabId::Overview);

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.state().active_tab, TabId::Overview);
}

#[test]
fn test_region_keys() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.state().selection.region, Region::NorthAmerica);

    press(&mut app, KeyCode::Down);
    assert_eq!(app.state().selection.region, Region::SouthAmerica);

    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.state().selection.region, Region::Oceania);
}

#[test]
fn test_year_keys_on_both_tabs() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.state().selection.year, 2024);

    app.handle_key(AppKeyEvent::with_shift(KeyCode::Char('L')));
    assert_eq!(app.state().selection.year, 2029);

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Left);
    assert_eq!(app.state().selection.year, 2028);

    app.handle_key(AppKeyEvent::with_shift(KeyCode::Left));
    assert_eq!(app.state().selection.year, 2023);

    press(&mut app, KeyCode::End);
    assert_eq!(app.state().selection.year, YEAR_MAX);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.state().selection.year, YEAR_MAX);

    press(&mut app, KeyCode::Home);
    assert_eq!(app.state().selection.year, YEAR_MIN);
}

#[test]
fn test_refresh_completes() {
    let mut app = app_with_delay(Duration::from_millis(20));
    press(&mut app, KeyCode::Char('r'));
    assert!(app.state().is_refreshing());

    assert!(app.wait_for_refresh(WAIT));
    assert!(!app.state().is_refreshing());
    assert!(app.state().last_refreshed.is_some());
}

#[test]
fn test_refresh_cancelled_with_esc() {
    let mut app = app_with_delay(Duration::from_secs(30));
    press(&mut app, KeyCode::Char('r'));
    assert!(app.state().is_refreshing());

    press(&mut app, KeyCode::Esc);
    assert!(app.wait_for_refresh(WAIT));
    assert!(!app.state().is_refreshing());
    assert_eq!(app.state().last_refreshed, None);
    assert_eq!(
        app.state().info_message.as_deref(),
        Some("Refresh cancelled")
    );
}

#[test]
fn test_second_refresh_ignored() {
    let mut app = app_with_delay(Duration::from_millis(100));
    press(&mut app, KeyCode::Char('r'));
    press(&mut app, KeyCode::Char('r'));

    assert!(app.wait_for_refresh(WAIT));
    assert!(!app.wait_for_refresh(Duration::from_millis(250)));
}

#[test]
fn test_selection_stays_live_during_refresh() {
    let mut app = app_with_delay(Duration::from_secs(30));
    press(&mut app, KeyCode::Char('r'));

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.state().selection.region, Region::NorthAmerica);
    assert!(app.state().is_refreshing());

    press(&mut app, KeyCode::Esc);
    assert!(app.wait_for_refresh(WAIT));
}

#[test]
fn test_esc_clears_error_when_idle() {
    let mut app = App::new();
    app.state_mut().set_error("boom".to_string());
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state().error_message, None);
}

#[test]
fn test_esc_dismisses_failed_refresh() {
    let mut app = App::new();
    app.state_mut().fail_refresh("timeout".to_string());
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.state().error_message, None);
    assert_eq!(app.state().refresh_status, RefreshStatus::Idle);
}

#[test]
fn test_save_without_data_dir_reports_error() {
    let mut app = App::new();
    app.handle_key(AppKeyEvent::with_ctrl(KeyCode::Char('s')));
    assert!(
        app.state()
            .error_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Failed to save"))
    );
}
