//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use crate::theme::toggle_theme;
use tracing::debug;

use super::{keys::handle_key, mouse, scroll, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Click { column, row } => mouse::handle_click(state, column, row),
        Message::ScrollWheel { up } => mouse::handle_scroll_wheel(state, up),

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Modal
        // ─────────────────────────────────────────────────────────
        Message::OpenSection(key) => {
            state.open_section(&key);
            UpdateResult::none()
        }

        Message::CloseModal => {
            state.close_modal();
            UpdateResult::none()
        }

        Message::OpenLink(index) => {
            let Some(section) = state.active_section() else {
                return UpdateResult::none();
            };
            match section.links().into_iter().nth(index) {
                Some(link) => UpdateResult::action(UpdateAction::OpenUrl {
                    url: link.url,
                    browser: state.settings.behavior.browser.clone(),
                }),
                None => {
                    debug!("No link #{} in section '{}'", index + 1, section.id);
                    UpdateResult::none()
                }
            }
        }

        // ─────────────────────────────────────────────────────────
        // Landing page
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.focus_prev();
            UpdateResult::none()
        }

        Message::ActivateFocused => match state.focused() {
            Some(target) => UpdateResult::message(Message::OpenSection(target.key.to_string())),
            None => UpdateResult::none(),
        },

        Message::ToggleTheme => {
            UpdateResult::action(UpdateAction::ApplyTheme(toggle_theme(state.theme)))
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
    }
}
