//! Key event handlers for the landing page and the modal overlay

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on whether a modal is on screen
///
/// A key that names no section draws nothing, so the landing bindings apply.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.active_section().is_some() {
        handle_key_modal(state, key)
    } else {
        handle_key_landing(state, key)
    }
}

/// Handle key events with no modal open
fn handle_key_landing(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab | InputKey::Right | InputKey::Down | InputKey::Char('l' | 'j') => {
            Some(Message::FocusNext)
        }
        InputKey::BackTab | InputKey::Left | InputKey::Up | InputKey::Char('h' | 'k') => {
            Some(Message::FocusPrev)
        }
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateFocused),

        InputKey::Char('t') => Some(Message::ToggleTheme),

        // 1-6 jump straight to a nav section
        key => key.digit().and_then(|n| {
            state
                .registry
                .nav_sections()
                .get(n - 1)
                .map(|entry| Message::OpenSection(entry.key.to_string()))
        }),
    }
}

/// Handle key events while a section is shown in the overlay
fn handle_key_modal(state: &AppState, key: InputKey) -> Option<Message> {
    let escape_closes = state.settings.behavior.escape_closes_modal;

    match key {
        InputKey::Esc | InputKey::Char('q') if escape_closes => Some(Message::CloseModal),
        InputKey::Char('x') => Some(Message::CloseModal),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp | InputKey::CharCtrl('u') => Some(Message::PageUp),
        InputKey::PageDown | InputKey::CharCtrl('d') | InputKey::Char(' ') => {
            Some(Message::PageDown)
        }
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        InputKey::Char('t') => Some(Message::ToggleTheme),

        InputKey::Tab | InputKey::Right => adjacent_nav_section(state, true),
        InputKey::BackTab | InputKey::Left => adjacent_nav_section(state, false),

        key => key.digit().map(|n| Message::OpenLink(n - 1)),
    }
}

/// Nav section after (or before) the open one. Sections outside the nav
/// bar step to the first (or last) nav entry.
fn adjacent_nav_section(state: &AppState, forward: bool) -> Option<Message> {
    let nav = state.registry.nav_sections();
    if nav.is_empty() {
        return None;
    }

    let current = state
        .modal
        .active()
        .and_then(|key| nav.iter().position(|e| e.key == key));

    let next = match (current, forward) {
        (Some(i), true) => (i + 1) % nav.len(),
        (Some(i), false) => (i + nav.len() - 1) % nav.len(),
        (None, true) => 0,
        (None, false) => nav.len() - 1,
    };

    Some(Message::OpenSection(nav[next].key.to_string()))
}
