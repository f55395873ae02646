//! Main TUI runner - entry point and event loop
//!
//! The theme is resolved before the terminal enters the alternate screen,
//! so the first frame is already drawn in the right palette.

use std::path::PathBuf;

use folio_app::config;
use folio_app::message::Message;
use folio_app::process;
use folio_app::signals;
use folio_app::state::AppState;
use folio_app::theme::{
    resolve_initial_theme, AmbientSignal, EnvAmbient, FileStore, FixedAmbient, MemoryStore,
    PreferenceStore,
};
use folio_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Startup options collected by the binary
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Directory holding `config.toml` and the stored theme
    pub config_dir: PathBuf,
    /// Keep the theme in memory only; nothing is read from or written to disk
    pub ephemeral: bool,
    /// Forget the stored theme before resolving
    pub reset_theme: bool,
    /// Section to open on the first frame
    pub initial_section: Option<String>,
    /// Override the detected OS color scheme (`Some(true)` = dark)
    pub ambient: Option<bool>,
}

/// Run the TUI application
pub async fn run(options: RunOptions) -> Result<()> {
    let settings = config::load_settings(&options.config_dir);
    info!(
        "Loaded settings: mouse={}, escape_closes_modal={}, icons={}",
        settings.behavior.mouse, settings.behavior.escape_closes_modal, settings.ui.icons
    );

    if !options.ephemeral {
        if let Err(e) = config::init_config_dir(&options.config_dir) {
            warn!("Could not initialize config directory: {}", e);
        }
    }

    let store: Box<dyn PreferenceStore> = if options.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(&options.config_dir))
    };

    if options.reset_theme {
        match store.clear() {
            Ok(()) => info!("Stored theme preference cleared"),
            Err(e) => warn!("Failed to clear stored theme preference: {}", e),
        }
    }

    let ambient: Box<dyn AmbientSignal> = match options.ambient {
        Some(dark) => Box::new(FixedAmbient(Some(dark))),
        None => Box::new(EnvAmbient),
    };

    // Before the first frame
    let theme = resolve_initial_theme(store.as_ref(), ambient.as_ref());

    let mouse = settings.behavior.mouse;
    let mut state = AppState::new(theme, settings);

    if let Some(key) = options.initial_section.as_deref() {
        if state.registry.contains(key) {
            state.open_section(key);
        } else {
            warn!("Unknown section '{}', starting on the landing page", key);
        }
    }

    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    if mouse {
        if let Err(e) = terminal::enable_mouse_capture() {
            warn!("{}", e);
        }
    }

    // Unified message channel (signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result =
        run_loop(&mut term, &mut state, msg_rx, store.as_ref()).context("UI loop failed");

    if mouse {
        if let Err(e) = terminal::disable_mouse_capture() {
            warn!("{}", e);
        }
    }
    if let Err(e) = ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string())) {
        error!("{}", e);
        // A loop error is the more useful one to report
        result?;
        return Err(e);
    }

    info!("Scholar Folio exiting");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    store: &dyn PreferenceStore,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, store);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message, store);
        }
    }

    Ok(())
}
