//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Left mouse button released at a cell
    Click { column: u16, row: u16 },

    /// Mouse wheel; `up` is towards the top of the content
    ScrollWheel { up: bool },

    /// Tick event for periodic updates
    Tick,

    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Modal
    // ─────────────────────────────────────────────────────────
    /// Show a section as the modal overlay, replacing any open one
    OpenSection(String),
    CloseModal,
    /// Open the n-th (0-based) link of the open section
    OpenLink(usize),

    // ─────────────────────────────────────────────────────────
    // Landing page
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    /// Open the section under the focus cursor
    ActivateFocused,

    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Modal body scrolling
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
}
