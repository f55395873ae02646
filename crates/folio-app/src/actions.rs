//! Action handlers: side effects requested by the update function

use std::process::Command;

use crate::handler::UpdateAction;
use crate::state::AppState;
use crate::theme::{apply_theme, PreferenceStore};
use folio_core::prelude::*;

/// Execute an action returned by `handler::update`
pub fn handle_action(state: &mut AppState, action: UpdateAction, store: &dyn PreferenceStore) {
    match action {
        UpdateAction::ApplyTheme(pref) => {
            apply_theme(&mut state.theme, store, pref);
            info!("Theme switched to {}", pref);
        }

        UpdateAction::OpenUrl { url, browser } => {
            // Fire-and-forget: the opener runs detached from the UI
            match open_url_in_browser(&url, &browser) {
                Ok(()) => info!("Opened {}", url),
                Err(e) => {
                    let err = Error::open_link(&url, e.to_string());
                    warn!("{}", err);
                }
            }
        }
    }
}

/// Open a URL in the system browser (or mail client for `mailto:`).
///
/// Uses `browser` from settings when non-empty; otherwise falls back to the
/// platform default opener.
fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        // Custom browser specified in settings.
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    // Platform-default browser.
    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}
