//! Terminal input: crossterm events turned into app messages

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use folio_app::input_key::InputKey;
use folio_app::message::Message;
use folio_core::prelude::*;
use std::time::Duration;

/// How long to wait for input before emitting a tick
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Map a key press onto the keys the viewer binds. Everything else is `None`.
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let input = match key.code {
        KeyCode::Char(c) if ctrl => InputKey::CharCtrl(c),
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Tab if shift => InputKey::BackTab,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Home => InputKey::Home,
        KeyCode::End => InputKey::End,
        KeyCode::PageUp => InputKey::PageUp,
        KeyCode::PageDown => InputKey::PageDown,
        _ => return None,
    };
    Some(input)
}

/// Left presses become clicks and the wheel scrolls. Drags and releases are dropped.
pub fn mouse_event_to_message(mouse: MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(Message::ScrollWheel { up: true }),
        MouseEventKind::ScrollDown => Some(Message::ScrollWheel { up: false }),
        _ => None,
    }
}

/// Translate one terminal event.
pub fn translate(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_message(mouse),
        Event::Resize(width, height) => {
            // The next draw lays out at the new size
            debug!("Terminal resized to {}x{}", width, height);
            None
        }
        _ => None,
    }
}

/// Wait for the next event, yielding `Message::Tick` when none arrives in time.
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }
    Ok(translate(event::read()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_bound_keys_translate() {
        let cases = [
            (KeyCode::Char('t'), InputKey::Char('t')),
            (KeyCode::Char('3'), InputKey::Char('3')),
            (KeyCode::Enter, InputKey::Enter),
            (KeyCode::Esc, InputKey::Esc),
            (KeyCode::Tab, InputKey::Tab),
            (KeyCode::BackTab, InputKey::BackTab),
            (KeyCode::Up, InputKey::Up),
            (KeyCode::Right, InputKey::Right),
            (KeyCode::PageDown, InputKey::PageDown),
            (KeyCode::End, InputKey::End),
        ];
        for (code, expected) in cases {
            assert_eq!(
                key_event_to_input(press(code, KeyModifiers::NONE)),
                Some(expected),
                "{:?}",
                code
            );
        }
    }

    #[test]
    fn test_modifiers() {
        assert_eq!(
            key_event_to_input(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputKey::CharCtrl('c'))
        );
        assert_eq!(
            key_event_to_input(press(KeyCode::Tab, KeyModifiers::SHIFT)),
            Some(InputKey::BackTab)
        );
        // Shifted letters arrive already uppercased
        assert_eq!(
            key_event_to_input(press(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(InputKey::Char('G'))
        );
    }

    #[test]
    fn test_unbound_keys_dropped() {
        assert_eq!(key_event_to_input(press(KeyCode::Insert, KeyModifiers::NONE)), None);
        assert_eq!(key_event_to_input(press(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(Event::Key(release)), None);
        assert_eq!(
            translate(Event::Key(press(KeyCode::Char('q'), KeyModifiers::NONE))),
            Some(Message::Key(InputKey::Char('q')))
        );
    }

    #[test]
    fn test_mouse_translation() {
        assert_eq!(
            translate(Event::Mouse(mouse(
                MouseEventKind::Down(MouseButton::Left),
                12,
                7
            ))),
            Some(Message::Click { column: 12, row: 7 })
        );
        assert_eq!(
            mouse_event_to_message(mouse(MouseEventKind::ScrollUp, 0, 0)),
            Some(Message::ScrollWheel { up: true })
        );
        assert_eq!(
            mouse_event_to_message(mouse(MouseEventKind::ScrollDown, 0, 0)),
            Some(Message::ScrollWheel { up: false })
        );
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Moved,
        ] {
            assert_eq!(mouse_event_to_message(mouse(kind, 1, 1)), None);
        }
    }

    #[test]
    fn test_resize_produces_no_message() {
        assert_eq!(translate(Event::Resize(100, 30)), None);
    }
}
