//! folio-app - Application state and orchestration for Scholar Folio
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the theme resolver and modal controller, the section registry with its literal
//! content, and configuration loading. It has no terminal dependency; the TUI crate
//! feeds it [`Message`]s and draws [`AppState`].

pub mod actions;
pub mod config;
pub mod content;
pub mod handler;
pub mod hit_map;
pub mod input_key;
pub mod message;
pub mod modal;
pub mod modal_view_state;
pub mod process;
pub mod registry;
pub mod signals;
pub mod state;
pub mod theme;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use hit_map::{HitMap, HitTarget, Region};
pub use message::Message;
pub use modal::ModalController;
pub use registry::{NavEntry, SectionRegistry};
pub use state::AppState;
