//! Tests for handler module

use super::*;
use crate::config::Settings;
use crate::hit_map::{HitTarget, Region};
use crate::input_key::InputKey;
use crate::state::{AppPhase, AppState};
use folio_core::ThemePreference;

fn test_state() -> AppState {
    AppState::new(ThemePreference::Light, Settings::default())
}

/// Run a message and any follow-up messages, returning the last action.
fn run(state: &mut AppState, message: Message) -> Option<UpdateAction> {
    let mut msg = Some(message);
    let mut action = None;
    while let Some(m) = msg {
        let result = update(state, m);
        if result.action.is_some() {
            action = result.action;
        }
        msg = result.message;
    }
    action
}

/// Hit map as the renderer would record it with the modal open on an 80x24 screen.
fn record_modal_frame(state: &mut AppState) {
    state.hit_map.clear();
    state
        .hit_map
        .record(Region::new(0, 0, 80, 24), HitTarget::Backdrop);
    state
        .hit_map
        .record(Region::new(10, 3, 60, 18), HitTarget::ModalSurface);
    state
        .hit_map
        .record(Region::new(65, 3, 3, 1), HitTarget::ModalClose);
    state.hit_map.record(
        Region::new(12, 10, 20, 1),
        HitTarget::Link("https://orcid.org/0000-0002-6780-6311".to_string()),
    );
}

// ─────────────────────────────────────────────────────────
// Modal state machine
// ─────────────────────────────────────────────────────────

#[test]
fn test_open_section_shows_only_that_section() {
    let mut state = test_state();
    run(&mut state, Message::OpenSection("about".to_string()));

    assert_eq!(
        state.active_section().map(|s| s.title),
        Some("About Me & Contact")
    );
}

#[test]
fn test_open_second_section_replaces_first() {
    let mut state = test_state();
    run(&mut state, Message::OpenSection("about".to_string()));
    run(&mut state, Message::OpenSection("lab".to_string()));

    assert_eq!(state.modal.active(), Some("lab"));
}

#[test]
fn test_close_modal() {
    let mut state = test_state();
    run(&mut state, Message::OpenSection("research".to_string()));
    run(&mut state, Message::CloseModal);

    assert!(state.active_section().is_none());
}

#[test]
fn test_open_unknown_section_renders_nothing() {
    let mut state = test_state();
    run(&mut state, Message::OpenSection("unknown-key".to_string()));

    assert!(state.active_section().is_none());
    assert_eq!(state.phase, AppPhase::Running);
}

// ─────────────────────────────────────────────────────────
// Mouse
// ─────────────────────────────────────────────────────────

#[test]
fn test_click_backdrop_closes() {
    let mut state = test_state();
    run(&mut state, Message::OpenSection("about".to_string()));
    record_modal_frame(&mut state);

    run(&mut state, Message::Click { column: 2, row: 1 });
    assert!(!state.modal.is_open());
}

#[test]
fn test_click_surface_does_not_close() {
    let mut state = test_state();
    run(&mut state, Message::OpenSection("about".to_string()));
    record_modal_frame(&mut state);

    let action = run(&mut state, Message::Click { column: 30, row: 15 });
    assert!(state.modal.is_open());
    assert_eq!(action, None);
}

#[test]
fn test_click_close_control_closes() {
    let mut state = test_state();
    run(&mut state, Message::OpenSection("about".to_string()));
    record_modal_frame(&mut state);

    run(&mut state, Message::Click { column: 66, row: 3 });
    assert!(!state.modal.is_open());
}

#[test]
fn test_click_link_opens_url() {
    let mut state = test_state();
    run(&mut state, Message::OpenSection("about".to_string()));
    record_modal_frame(&mut state);

    let action = run(&mut state, Message::Click { column: 15, row: 10 });
    assert_eq!(
        action,
        Some(UpdateAction::OpenUrl {
            url: "https://orcid.org/0000-0002-6780-6311".to_string(),
            browser: String::new(),
        })
    );
    assert!(state.modal.is_open());
}

#[test]
fn test_click_card_opens_section() {
    let mut state = test_state();
    state
        .hit_map
        .record(Region::new(0, 10, 40, 6), HitTarget::Card("funder".to_string()));

    run(&mut state, Message::Click { column: 5, row: 12 });
    assert_eq!(state.modal.active(), Some("funder"));
}

#[test]
fn test_click_nav_opens_section() {
    let mut state = test_state();
    state
        .hit_map
        .record(Region::new(0, 3, 10, 1), HitTarget::Nav("news".to_string()));

    run(&mut state, Message::Click { column: 3, row: 3 });
    assert_eq!(state.modal.active(), Some("news"));
}

#[test]
fn test_click_theme_toggle() {
    let mut state = test_state();
    state
        .hit_map
        .record(Region::new(70, 0, 8, 1), HitTarget::ThemeToggle);

    let action = run(&mut state, Message::Click { column: 72, row: 0 });
    assert_eq!(action, Some(UpdateAction::ApplyTheme(ThemePreference::Dark)));
}

#[test]
fn test_click_ignored_when_mouse_disabled() {
    let mut state = test_state();
    state.settings.behavior.mouse = false;
    run(&mut state, Message::OpenSection("about".to_string()));
    record_modal_frame(&mut state);

    run(&mut state, Message::Click { column: 2, row: 1 });
    assert!(state.modal.is_open());
}

#[test]
fn test_click_on_empty_cell() {
    let mut state = test_state();
    let action = run(&mut state, Message::Click { column: 5, row: 5 });
    assert_eq!(action, None);
    assert!(!state.modal.is_open());
}

#[test]
fn test_scroll_wheel_only_scrolls_open_modal() {
    let mut state = test_state();
    run(&mut state, Message::ScrollWheel { up: false });
    assert_eq!(state.modal_view.offset, 0);

    run(&mut state, Message::OpenSection("research".to_string()));
    state.modal_view.update_content_size(100, 20);
    run(&mut state, Message::ScrollWheel { up: false });
    assert_eq!(state.modal_view.offset, 3);
    run(&mut state, Message::ScrollWheel { up: true });
    assert_eq!(state.modal_view.offset, 0);
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_escape_closes_modal() {
    let mut state = test_state();
    run(&mut state, Message::OpenSection("news".to_string()));

    run(&mut state, Message::Key(InputKey::Esc));
    assert!(!state.modal.is_open());
    assert_eq!(state.phase, AppPhase::Running);
}

#[test]
fn test_escape_disabled_keeps_modal() {
    let mut state = test_state();
    state.settings.behavior.escape_closes_modal = false;
    run(&mut state, Message::OpenSection("news".to_string()));

    assert_eq!(handle_key(&state, InputKey::Esc), None);
    assert_eq!(handle_key(&state, InputKey::Char('q')), None);
    assert_eq!(
        handle_key(&state, InputKey::Char('x')),
        Some(Message::CloseModal)
    );
}

#[test]
fn test_unknown_section_keeps_landing_keys() {
    let mut state = test_state();
    state.settings.behavior.escape_closes_modal = false;
    run(&mut state, Message::OpenSection("unknown-key".to_string()));

    assert_eq!(handle_key(&state, InputKey::Tab), Some(Message::FocusNext));
    assert_eq!(
        handle_key(&state, InputKey::Char('1')),
        Some(Message::OpenSection("research".to_string()))
    );

    // Focus moves off the first nav entry, then Enter replaces the stale key
    run(&mut state, Message::Key(InputKey::Tab));
    run(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.modal.active(), Some("experience"));
}

#[test]
fn test_quit_from_landing() {
    let mut state = test_state();
    run(&mut state, Message::Key(InputKey::Char('q')));
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_with_modal_open() {
    let mut state = test_state();
    run(&mut state, Message::OpenSection("lab".to_string()));
    run(&mut state, Message::Key(InputKey::CharCtrl('c')));
    assert!(state.should_quit());
}

#[test]
fn test_digit_opens_nav_section() {
    let state = test_state();
    assert_eq!(
        handle_key(&state, InputKey::Char('1')),
        Some(Message::OpenSection("research".to_string()))
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('6')),
        Some(Message::OpenSection("about".to_string()))
    );
    assert_eq!(handle_key(&state, InputKey::Char('7')), None);
}

#[test]
fn test_focus_and_activate() {
    let mut state = test_state();
    run(&mut state, Message::Key(InputKey::BackTab));
    run(&mut state, Message::Key(InputKey::Enter));

    // Last focus stop is the donate card
    assert_eq!(state.modal.active(), Some("donate"));
}

#[test]
fn test_tab_in_modal_moves_to_next_nav_section() {
    let mut state = test_state();
    run(&mut state, Message::OpenSection("research".to_string()));
    run(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.modal.active(), Some("experience"));

    run(&mut state, Message::OpenSection("about".to_string()));
    run(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.modal.active(), Some("research"));

    // Card-only sections step into the nav bar
    run(&mut state, Message::OpenSection("donate".to_string()));
    run(&mut state, Message::Key(InputKey::BackTab));
    assert_eq!(state.modal.active(), Some("about"));
}

#[test]
fn test_digit_in_modal_opens_link() {
    let mut state = test_state();
    run(&mut state, Message::OpenSection("funder".to_string()));

    let action = run(&mut state, Message::Key(InputKey::Char('1')));
    assert_eq!(
        action,
        Some(UpdateAction::OpenUrl {
            url: "https://www.fightforsight.org.uk/".to_string(),
            browser: String::new(),
        })
    );

    let action = run(&mut state, Message::Key(InputKey::Char('2')));
    assert_eq!(action, None);
}

#[test]
fn test_open_link_uses_configured_browser() {
    let mut state = test_state();
    state.settings.behavior.browser = "firefox".to_string();
    run(&mut state, Message::OpenSection("publications".to_string()));

    match run(&mut state, Message::OpenLink(0)) {
        Some(UpdateAction::OpenUrl { url, browser }) => {
            assert_eq!(url, "https://doi.org/10.1111/acel.14473");
            assert_eq!(browser, "firefox");
        }
        other => panic!("unexpected action: {:?}", other),
    }
}

#[test]
fn test_open_link_without_modal() {
    let mut state = test_state();
    assert_eq!(run(&mut state, Message::OpenLink(0)), None);
}

// ─────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_theme_requests_apply() {
    let mut state = test_state();
    let action = run(&mut state, Message::Key(InputKey::Char('t')));
    assert_eq!(action, Some(UpdateAction::ApplyTheme(ThemePreference::Dark)));

    // The flag itself is applied by process_message
    assert_eq!(state.theme, ThemePreference::Light);
}

#[test]
fn test_toggle_theme_from_modal() {
    let mut state = test_state();
    state.theme = ThemePreference::Dark;
    run(&mut state, Message::OpenSection("lab".to_string()));

    let action = run(&mut state, Message::Key(InputKey::Char('t')));
    assert_eq!(action, Some(UpdateAction::ApplyTheme(ThemePreference::Light)));
    assert!(state.modal.is_open());
}

// ─────────────────────────────────────────────────────────
// Scrolling
// ─────────────────────────────────────────────────────────

#[test]
fn test_scroll_keys_in_modal() {
    let mut state = test_state();
    run(&mut state, Message::OpenSection("news".to_string()));
    state.modal_view.update_content_size(200, 22);

    run(&mut state, Message::Key(InputKey::Down));
    run(&mut state, Message::Key(InputKey::Down));
    assert_eq!(state.modal_view.offset, 2);

    run(&mut state, Message::Key(InputKey::PageDown));
    assert_eq!(state.modal_view.offset, 22);

    run(&mut state, Message::Key(InputKey::End));
    assert_eq!(state.modal_view.offset, 178);

    run(&mut state, Message::Key(InputKey::Home));
    assert_eq!(state.modal_view.offset, 0);
}

#[test]
fn test_new_section_resets_scroll() {
    let mut state = test_state();
    run(&mut state, Message::OpenSection("news".to_string()));
    state.modal_view.update_content_size(200, 22);
    run(&mut state, Message::ScrollToBottom);

    run(&mut state, Message::OpenSection("research".to_string()));
    assert_eq!(state.modal_view.offset, 0);
}
