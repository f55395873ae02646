//! folio-tui - Terminal UI for Scholar Folio
//!
//! Draws the landing page and section modals with ratatui, turns terminal
//! input into `folio-app` messages and runs the event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::{run, RunOptions};
