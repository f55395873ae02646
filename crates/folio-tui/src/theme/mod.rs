//! Centralized theme system.
//!
//! This module provides:
//! - `palette` - Light and dark colour palettes
//! - `styles` - Semantic style builder functions
//! - `icons` - Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;

pub use icons::IconSet;
pub use palette::Palette;
