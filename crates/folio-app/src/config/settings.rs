//! Settings and preference files in the user config directory
//!
//! - `config.toml` - behavior and UI settings, read once at startup
//! - `preferences.toml` - durable user choices (the theme preference)

use super::types::{Settings, UserPreferences};
use folio_core::logging::APP_DIR_NAME;
use folio_core::prelude::*;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.toml";
pub const PREFERENCES_FILENAME: &str = "preferences.toml";

/// Default config directory: `<platform config dir>/scholar-folio`
pub fn default_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_DIR_NAME))
        .ok_or(Error::NoConfigDir)
}

/// Load settings from `config.toml` in `config_dir`.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default `config.toml` if none exists
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    ensure_dir(config_dir)?;

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Scholar Folio Configuration

[behavior]
escape_closes_modal = true   # Esc / q close the open section
mouse = true                 # Click cards, links and the backdrop
browser = ""                 # Empty = platform default opener

[ui]
icons = "unicode"            # "unicode" or "nerd_fonts"
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// User Preferences
// ─────────────────────────────────────────────────────────────────────────────

/// Load user preferences from `preferences.toml`.
///
/// `Ok(None)` means there is no file yet. A file that cannot be read or
/// parsed is an error; callers decide whether that counts as "absent".
pub fn load_user_preferences(config_dir: &Path) -> Result<Option<UserPreferences>> {
    let prefs_path = config_dir.join(PREFERENCES_FILENAME);

    if !prefs_path.exists() {
        debug!("No preferences file at {:?}", prefs_path);
        return Ok(None);
    }

    let content = std::fs::read_to_string(&prefs_path)
        .map_err(|e| Error::storage(format!("Failed to read {:?}: {}", prefs_path, e)))?;

    match toml::from_str(&content) {
        Ok(prefs) => {
            debug!("Loaded user preferences from {:?}", prefs_path);
            Ok(Some(prefs))
        }
        Err(e) => {
            warn!("Failed to parse {:?}: {}", prefs_path, e);
            Err(Error::storage_corrupt(prefs_path))
        }
    }
}

/// Save user preferences to `preferences.toml`.
///
/// Uses atomic write (temp file + rename).
pub fn save_user_preferences(config_dir: &Path, prefs: &UserPreferences) -> Result<()> {
    ensure_dir(config_dir)?;

    let prefs_path = config_dir.join(PREFERENCES_FILENAME);
    let temp_path = config_dir.join(".preferences.toml.tmp");

    let header = "# Scholar Folio user preferences\n\
                  # Written when the theme is toggled\n\n";

    let content = toml::to_string_pretty(prefs)
        .map_err(|e| Error::storage(format!("Failed to serialize preferences: {}", e)))?;

    let full_content = format!("{}{}", header, content);

    std::fs::write(&temp_path, full_content)
        .map_err(|e| Error::storage(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &prefs_path)
        .map_err(|e| Error::storage(format!("Failed to rename temp file: {}", e)))?;

    debug!("Saved user preferences to {:?}", prefs_path);
    Ok(())
}

/// Delete `preferences.toml`, if present.
pub fn clear_user_preferences(config_dir: &Path) -> Result<()> {
    let prefs_path = config_dir.join(PREFERENCES_FILENAME);
    match std::fs::remove_file(&prefs_path) {
        Ok(()) => {
            info!("Removed {:?}", prefs_path);
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::storage(format!(
            "Failed to remove {:?}: {}",
            prefs_path, e
        ))),
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use folio_core::ThemePreference;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert!(settings.behavior.escape_closes_modal);
        assert!(settings.behavior.mouse);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let config = r#"
[behavior]
escape_closes_modal = false
browser = "firefox"

[ui]
icons = "nerd_fonts"
"#;
        std::fs::write(temp.path().join(CONFIG_FILENAME), config).unwrap();

        let settings = load_settings(temp.path());

        assert!(!settings.behavior.escape_closes_modal);
        assert_eq!(settings.behavior.browser, "firefox");
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILENAME), "this is [not toml").unwrap();

        let settings = load_settings(temp.path());
        assert!(settings.behavior.escape_closes_modal);
    }

    #[test]
    fn test_init_config_dir_writes_parseable_defaults() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("nested");

        init_config_dir(&dir).unwrap();

        let content = std::fs::read_to_string(dir.join(CONFIG_FILENAME)).unwrap();
        let parsed: Settings = toml::from_str(&content).unwrap();
        assert!(parsed.behavior.mouse);
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILENAME), "[ui]\nicons = \"nerd_fonts\"\n")
            .unwrap();

        init_config_dir(temp.path()).unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
    }

    #[test]
    fn test_preferences_missing_file_is_none() {
        let temp = tempdir().unwrap();
        assert_eq!(load_user_preferences(temp.path()).unwrap(), None);
    }

    #[test]
    fn test_preferences_round_trip() {
        let temp = tempdir().unwrap();
        let prefs = UserPreferences::with_theme(ThemePreference::Dark);

        save_user_preferences(temp.path(), &prefs).unwrap();
        let loaded = load_user_preferences(temp.path()).unwrap();

        assert_eq!(loaded, Some(prefs));
        assert!(!temp.path().join(".preferences.toml.tmp").exists());
    }

    #[test]
    fn test_preferences_corrupt_file_is_error() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(PREFERENCES_FILENAME), "theme = [not toml").unwrap();

        let result = load_user_preferences(temp.path());
        assert!(matches!(result, Err(Error::StorageCorrupt { .. })));
    }

    #[test]
    fn test_clear_preferences() {
        let temp = tempdir().unwrap();
        save_user_preferences(temp.path(), &UserPreferences::with_theme(ThemePreference::Light))
            .unwrap();

        clear_user_preferences(temp.path()).unwrap();
        assert_eq!(load_user_preferences(temp.path()).unwrap(), None);

        // Clearing twice is fine
        clear_user_preferences(temp.path()).unwrap();
    }
}
