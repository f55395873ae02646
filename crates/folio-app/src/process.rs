//! Message processing
//!
//! Drives a message and its follow-ups through the TEA update function,
//! then carries out the returned actions.

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::PreferenceStore;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message, store: &dyn PreferenceStore) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(state, action, store);
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::input_key::InputKey;
    use crate::theme::{resolve_initial_theme, FixedAmbient, MemoryStore, MockPreferenceStore};
    use folio_core::{Error, ThemePreference};

    #[test]
    fn test_toggle_applies_and_persists() {
        let store = MemoryStore::new();
        let mut state = AppState::new(ThemePreference::Light, Settings::default());

        process_message(&mut state, Message::Key(InputKey::Char('t')), &store);

        assert_eq!(state.theme, ThemePreference::Dark);
        assert_eq!(store.get(), Some(ThemePreference::Dark));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let store = MemoryStore::new();
        let mut state = AppState::new(ThemePreference::Dark, Settings::default());

        process_message(&mut state, Message::ToggleTheme, &store);
        process_message(&mut state, Message::ToggleTheme, &store);

        assert_eq!(state.theme, ThemePreference::Dark);
        assert_eq!(store.get(), Some(ThemePreference::Dark));
    }

    #[test]
    fn test_toggle_survives_restart() {
        let store = MemoryStore::new();
        let mut state = AppState::new(ThemePreference::Light, Settings::default());
        process_message(&mut state, Message::ToggleTheme, &store);

        // Ambient says light; the stored choice still wins
        let resolved = resolve_initial_theme(&store, &FixedAmbient(Some(false)));
        assert_eq!(resolved, ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_with_failing_store_still_applies() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_save()
            .times(1)
            .returning(|_| Err(Error::storage("disk full")));

        let mut state = AppState::new(ThemePreference::Light, Settings::default());
        process_message(&mut state, Message::ToggleTheme, &store);

        assert_eq!(state.theme, ThemePreference::Dark);
    }

    #[test]
    fn test_follow_up_messages_are_processed() {
        let store = MemoryStore::new();
        let mut state = AppState::new(ThemePreference::Light, Settings::default());

        // Key -> OpenSection
        process_message(&mut state, Message::Key(InputKey::Char('4')), &store);
        assert_eq!(state.modal.active(), Some("publications"));
        assert_eq!(store.get(), None);
    }
}
