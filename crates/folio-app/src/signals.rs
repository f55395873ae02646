//! Termination signals from the OS
//!
//! A signal is turned into `Message::Quit` and posted to the UI loop, which
//! then restores the terminal on its own way out.

use std::fmt;

use tokio::sync::mpsc;

use crate::message::Message;
use folio_core::prelude::*;

/// The OS signals the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT, or Ctrl+C on Windows
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => f.write_str("interrupt"),
            ShutdownSignal::Terminate => f.write_str("terminate"),
        }
    }
}

/// Start listening in the background. The task ends after the first signal.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let signal = match next_signal().await {
            Ok(signal) => signal,
            Err(e) => {
                error!("Not listening for shutdown signals: {}", e);
                return;
            }
        };

        if let Err(e) = forward_shutdown(&tx, signal).await {
            debug!("{}", e);
        }
    });
}

/// Ask the UI loop to quit because `signal` arrived.
///
/// Fails only when the loop has already dropped its receiver.
pub async fn forward_shutdown(tx: &mpsc::Sender<Message>, signal: ShutdownSignal) -> Result<()> {
    info!("Received {} signal, quitting", signal);
    tx.send(Message::Quit)
        .await
        .map_err(|_| Error::channel_send(format!("UI loop gone before {} signal", signal)))
}

#[cfg(unix)]
async fn next_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("SIGINT handler: {}", e)))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("SIGTERM handler: {}", e)))?;

    Ok(tokio::select! {
        _ = sigint.recv() => ShutdownSignal::Interrupt,
        _ = sigterm.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(not(unix))]
async fn next_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Ctrl+C handler: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}
