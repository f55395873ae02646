//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for the landing page and the modal
//! - `mouse`: Click resolution through the renderer's hit map
//! - `scroll`: Modal body scroll handlers

pub(crate) mod keys;
pub(crate) mod mouse;
pub(crate) mod scroll;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use folio_core::ThemePreference;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Set the presentation flag and persist the preference.
    ///
    /// Carried out by `process.rs`, which owns the preference store.
    ApplyTheme(ThemePreference),

    /// Open a link with the system opener.
    ///
    /// Fire-and-forget OS call.
    /// If `browser` is empty, the platform default opener is used.
    OpenUrl { url: String, browser: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
