//! Light/dark presentation preference

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two presentation modes the UI can be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Literal value written to durable storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// The opposite preference.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    /// Interpret a value read back from durable storage.
    ///
    /// Only the exact literal `dark` selects the dark theme. Anything else
    /// that was stored under the key, including garbage, reads as light.
    pub fn from_stored(value: &str) -> Self {
        if value == ThemePreference::Dark.as_str() {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    /// Map a "prefers dark" signal onto a preference.
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
