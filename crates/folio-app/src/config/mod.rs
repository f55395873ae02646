//! Configuration file parsing for Scholar Folio
//!
//! Supports:
//! - `<config dir>/config.toml` - Behavior and UI settings
//! - `<config dir>/preferences.toml` - Durable user preferences

pub mod settings;
pub mod types;

pub use settings::{
    clear_user_preferences, default_config_dir, init_config_dir, load_settings,
    load_user_preferences, save_user_preferences, CONFIG_FILENAME, PREFERENCES_FILENAME,
};
pub use types::*;
