//! Mouse handlers
//!
//! Clicks are resolved against the hit map recorded by the last frame.

use crate::hit_map::HitTarget;
use crate::message::Message;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Lines moved per wheel notch
const WHEEL_STEP: usize = 3;

/// Handle a left click at a terminal cell
pub fn handle_click(state: &mut AppState, column: u16, row: u16) -> UpdateResult {
    if !state.settings.behavior.mouse {
        return UpdateResult::none();
    }

    let Some(target) = state.hit_map.hit(column, row) else {
        return UpdateResult::none();
    };

    match target {
        HitTarget::Backdrop | HitTarget::ModalClose => UpdateResult::message(Message::CloseModal),
        // Clicks inside the panel stop here
        HitTarget::ModalSurface => UpdateResult::none(),
        HitTarget::Nav(key) | HitTarget::Card(key) => {
            UpdateResult::message(Message::OpenSection(key.clone()))
        }
        HitTarget::ThemeToggle => UpdateResult::message(Message::ToggleTheme),
        HitTarget::Link(url) => UpdateResult::action(UpdateAction::OpenUrl {
            url: url.clone(),
            browser: state.settings.behavior.browser.clone(),
        }),
    }
}

/// Handle a wheel notch; only the modal body scrolls
pub fn handle_scroll_wheel(state: &mut AppState, up: bool) -> UpdateResult {
    if !state.settings.behavior.mouse || state.active_section().is_none() {
        return UpdateResult::none();
    }

    if up {
        state.modal_view.scroll_up(WHEEL_STEP);
    } else {
        state.modal_view.scroll_down(WHEEL_STEP);
    }
    UpdateResult::none()
}
