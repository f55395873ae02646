//! Configuration types for Scholar Folio
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `UserPreferences` - Durable user choices (`preferences.toml`)
//! - Related sub-types and enums

use folio_core::ThemePreference;
use serde::{Deserialize, Serialize};

/// Global application settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Interaction behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Close the open section with Esc/q
    #[serde(default = "default_true")]
    pub escape_closes_modal: bool,

    /// Capture mouse clicks and wheel events
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Browser command used to open links (empty = platform default)
    #[serde(default)]
    pub browser: String,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            escape_closes_modal: true,
            mouse: true,
            browser: String::new(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,
}

fn default_true() -> bool {
    true
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// Durable user choices, stored separately from `config.toml`.
///
/// `theme` is the fixed storage key for the light/dark preference; its
/// absence means "no explicit choice". The raw string is kept so a value
/// written by hand still counts as a choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl UserPreferences {
    pub fn with_theme(pref: ThemePreference) -> Self {
        Self {
            theme: Some(pref.as_str().to_string()),
        }
    }

    /// The stored choice, if the key is present. Unrecognised values are light.
    pub fn theme_preference(&self) -> Option<ThemePreference> {
        self.theme.as_deref().map(ThemePreference::from_stored)
    }
}
