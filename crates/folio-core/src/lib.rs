//! # folio-core - Core Domain Types
//!
//! Foundation crate for Scholar Folio. Provides the theme preference type,
//! section and content definitions, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Theme (`theme`)
//! - [`ThemePreference`] - Light or dark presentation, with its storage literal
//!
//! ### Sections (`section`)
//! - [`SectionDefinition`] - id, title, icon handle and content of a section
//! - [`ContentBlock`] - Opaque content payloads (paragraphs, lists, publications, ...)
//! - [`Publication`], [`Conference`], [`NewsItem`], [`ExperienceEntry`], [`Link`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod section;
pub mod theme;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use section::{
    ContentBlock, Conference, ExperienceEntry, IconKind, Link, LinkTarget, NewsItem, Publication,
    SectionDefinition,
};
pub use theme::ThemePreference;
