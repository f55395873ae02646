//! Modal view controller
//!
//! Tracks which single section, if any, is expanded into the overlay.
//!
//! ```text
//! Closed --open(k)--> Open(k) --open(k')--> Open(k')
//!                        |
//!                     close()
//!                        v
//!                     Closed
//! ```

use folio_core::SectionDefinition;

use crate::registry::SectionRegistry;

/// The at-most-one open section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalController {
    active: Option<String>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show section `key`, replacing whatever was open. Any key is accepted.
    pub fn open(&mut self, key: impl Into<String>) {
        let key = key.into();
        tracing::debug!("Opening section modal: {}", key);
        self.active = Some(key);
    }

    /// Hide the overlay. Closing when nothing is open is a no-op.
    pub fn close(&mut self) {
        if let Some(key) = self.active.take() {
            tracing::debug!("Closed section modal: {}", key);
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// The section to draw, or `None` when closed or the key is not registered.
    pub fn render<'a>(&self, registry: &'a SectionRegistry) -> Option<&'a SectionDefinition> {
        self.active.as_deref().and_then(|key| registry.get(key))
    }
}
