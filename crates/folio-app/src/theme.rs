//! Theme preference resolution and persistence
//!
//! Precedence when starting up, highest first:
//! 1. the preference stored by an explicit toggle (key `theme`)
//! 2. the ambient "prefers dark" hint from the environment
//! 3. light
//!
//! A stored value other than `dark` resolves to light without consulting
//! the ambient hint. Storage and ambient failures are treated as "signal
//! absent" and only show up in the log.

use std::cell::Cell;
use std::path::PathBuf;

use folio_core::prelude::*;
use folio_core::ThemePreference;

use crate::config;

/// Environment override for the ambient colour scheme (`dark` / `light`)
pub const COLOR_SCHEME_ENV_VAR: &str = "FOLIO_COLOR_SCHEME";

/// Conventional `fg;bg` colour hint exported by many terminals
pub const COLORFGBG_ENV_VAR: &str = "COLORFGBG";

// ─────────────────────────────────────────────────────────────────────────────
// Durable storage
// ─────────────────────────────────────────────────────────────────────────────

/// Durable key/value storage for the theme preference.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// Read the stored preference. `Ok(None)` when nothing was ever stored.
    fn load(&self) -> Result<Option<ThemePreference>>;

    /// Persist the preference under the fixed key.
    fn save(&self, pref: ThemePreference) -> Result<()>;

    /// Forget any stored preference.
    fn clear(&self) -> Result<()>;
}

/// `preferences.toml` inside the config directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Result<Option<ThemePreference>> {
        Ok(config::load_user_preferences(&self.dir)?.and_then(|prefs| prefs.theme_preference()))
    }

    fn save(&self, pref: ThemePreference) -> Result<()> {
        config::save_user_preferences(&self.dir, &config::UserPreferences::with_theme(pref))
    }

    fn clear(&self) -> Result<()> {
        config::clear_user_preferences(&self.dir)
    }
}

/// In-process store that forgets everything on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Cell<Option<ThemePreference>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(pref: ThemePreference) -> Self {
        Self {
            value: Cell::new(Some(pref)),
        }
    }

    pub fn get(&self) -> Option<ThemePreference> {
        self.value.get()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<ThemePreference>> {
        Ok(self.value.get())
    }

    fn save(&self, pref: ThemePreference) -> Result<()> {
        self.value.set(Some(pref));
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.value.set(None);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Ambient preference
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only, advisory "prefers dark colour scheme" signal.
pub trait AmbientSignal {
    /// `None` when the environment offers no usable hint.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Ambient hint derived from environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvAmbient;

impl AmbientSignal for EnvAmbient {
    fn prefers_dark(&self) -> Option<bool> {
        let scheme = std::env::var(COLOR_SCHEME_ENV_VAR).ok();
        let colorfgbg = std::env::var(COLORFGBG_ENV_VAR).ok();
        ambient_from_vars(scheme.as_deref(), colorfgbg.as_deref())
    }
}

/// A fixed ambient answer (CLI override, tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedAmbient(pub Option<bool>);

impl AmbientSignal for FixedAmbient {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Combine the explicit scheme variable and `COLORFGBG`.
pub fn ambient_from_vars(scheme: Option<&str>, colorfgbg: Option<&str>) -> Option<bool> {
    match scheme.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("dark") => return Some(true),
        Some("light") => return Some(false),
        _ => {}
    }
    colorfgbg.and_then(parse_colorfgbg)
}

/// Interpret a `COLORFGBG` value such as `15;0` or `0;default;15`.
///
/// The last field is the background colour index. ANSI 0-6 and 8 are dark
/// backgrounds; 7 and 9-15 are light.
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(true),
        7 | 9..=15 => Some(false),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolver
// ─────────────────────────────────────────────────────────────────────────────

/// Which precedence tier produced the initial theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    Ambient,
    Default,
}

/// Resolve the initial theme, reporting which tier decided it.
pub fn resolve_initial_theme_with_source(
    store: &dyn PreferenceStore,
    ambient: &dyn AmbientSignal,
) -> (ThemePreference, ThemeSource) {
    match store.load() {
        Ok(Some(pref)) => return (pref, ThemeSource::Stored),
        Ok(None) => {}
        Err(e) => warn!("Ignoring unreadable theme preference: {}", e),
    }

    match ambient.prefers_dark() {
        Some(dark) => (ThemePreference::from_dark_flag(dark), ThemeSource::Ambient),
        None => (ThemePreference::default(), ThemeSource::Default),
    }
}

/// Resolve the theme to start with. Call once, before the first frame.
pub fn resolve_initial_theme(
    store: &dyn PreferenceStore,
    ambient: &dyn AmbientSignal,
) -> ThemePreference {
    let (pref, source) = resolve_initial_theme_with_source(store, ambient);
    info!("Initial theme: {} ({:?})", pref, source);
    pref
}

/// Set the presentation flag and persist the choice.
///
/// A failed write leaves the flag applied for this run.
pub fn apply_theme(flag: &mut ThemePreference, store: &dyn PreferenceStore, pref: ThemePreference) {
    *flag = pref;
    if let Err(e) = store.save(pref) {
        warn!("Failed to persist theme preference '{}': {}", pref, e);
    }
}

/// The opposite of `current`. The caller applies it.
pub fn toggle_theme(current: ThemePreference) -> ThemePreference {
    current.toggled()
}
