//! Colour palettes for the light and dark presentations.
//!
//! Slate neutrals with a sky accent. The active palette is picked from
//! `AppState::theme` on every frame, so a toggle repaints immediately.

use folio_core::ThemePreference;
use ratatui::style::Color;

/// Every colour a widget may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub page_bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub accent_soft_bg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_bright: Color,

    pub link: Color,

    // --- Effects ---
    pub backdrop_fg: Color,
    pub backdrop_bg: Color,
    pub shadow: Color,
}

// Tailwind slate / sky values
const SLATE_50: Color = Color::Rgb(248, 250, 252);
const SLATE_100: Color = Color::Rgb(241, 245, 249);
const SLATE_200: Color = Color::Rgb(226, 232, 240);
const SLATE_300: Color = Color::Rgb(203, 213, 225);
const SLATE_400: Color = Color::Rgb(148, 163, 184);
const SLATE_500: Color = Color::Rgb(100, 116, 139);
const SLATE_600: Color = Color::Rgb(71, 85, 105);
const SLATE_700: Color = Color::Rgb(51, 65, 85);
const SLATE_800: Color = Color::Rgb(30, 41, 59);
const SLATE_900: Color = Color::Rgb(15, 23, 42);
const SLATE_950: Color = Color::Rgb(2, 6, 23);
const SKY_100: Color = Color::Rgb(224, 242, 254);
const SKY_400: Color = Color::Rgb(56, 189, 248);
const SKY_500: Color = Color::Rgb(14, 165, 233);
const SKY_600: Color = Color::Rgb(2, 132, 199);
const SKY_900: Color = Color::Rgb(12, 74, 110);
const WHITE: Color = Color::Rgb(255, 255, 255);

pub const LIGHT: Palette = Palette {
    page_bg: SLATE_50,
    card_bg: WHITE,
    popup_bg: WHITE,
    border_dim: SLATE_200,
    border_active: SKY_500,
    accent: SKY_600,
    accent_soft_bg: SKY_100,
    text_primary: SLATE_700,
    text_secondary: SLATE_600,
    text_muted: SLATE_500,
    text_bright: SLATE_800,
    link: SKY_600,
    backdrop_fg: SLATE_400,
    backdrop_bg: SLATE_300,
    shadow: SLATE_400,
};

pub const DARK: Palette = Palette {
    page_bg: SLATE_900,
    card_bg: SLATE_800,
    popup_bg: SLATE_900,
    border_dim: SLATE_700,
    border_active: SKY_400,
    accent: SKY_400,
    accent_soft_bg: SKY_900,
    text_primary: SLATE_300,
    text_secondary: SLATE_400,
    text_muted: SLATE_500,
    text_bright: SLATE_100,
    link: SKY_400,
    backdrop_fg: SLATE_600,
    backdrop_bg: SLATE_950,
    shadow: SLATE_950,
};

/// Palette for a theme preference.
pub fn for_theme(theme: ThemePreference) -> &'static Palette {
    match theme {
        ThemePreference::Light => &LIGHT,
        ThemePreference::Dark => &DARK,
    }
}
