//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - single-width characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use folio_app::config::IconMode;
use folio_core::{IconKind, ThemePreference};

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for an icon handle.
    pub fn get(&self, kind: IconKind) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => nerd_font(kind),
            IconMode::Unicode => unicode(kind),
        }
    }

    /// Icon on the theme toggle: the moon offers dark, the sun offers light.
    pub fn theme_toggle(&self, current: ThemePreference) -> &'static str {
        match current {
            ThemePreference::Light => self.get(IconKind::Moon),
            ThemePreference::Dark => self.get(IconKind::Sun),
        }
    }
}

fn nerd_font(kind: IconKind) -> &'static str {
    match kind {
        IconKind::AcademicCap => "\u{f19d}",    // nf-fa-graduation_cap
        IconKind::Briefcase => "\u{f0b1}",      // nf-fa-briefcase
        IconKind::News => "\u{f1ea}",           // nf-fa-newspaper_o
        IconKind::BookOpen => "\u{f02d}",       // nf-fa-book
        IconKind::UserCircle => "\u{f2bd}",     // nf-fa-user_circle
        IconKind::Heart => "\u{f004}",          // nf-fa-heart
        IconKind::Gift => "\u{f06b}",           // nf-fa-gift
        IconKind::Users => "\u{f0c0}",          // nf-fa-users
        IconKind::BuildingOffice => "\u{f1ad}", // nf-fa-building
        IconKind::Mail => "\u{f0e0}",           // nf-fa-envelope
        IconKind::LinkedIn => "\u{f0e1}",       // nf-fa-linkedin
        IconKind::ResearchGate => "\u{f0c3}",   // nf-fa-flask
        IconKind::Orcid => "\u{f2c2}",          // nf-fa-id_card
        IconKind::Sun => "\u{f185}",            // nf-fa-sun_o
        IconKind::Moon => "\u{f186}",           // nf-fa-moon_o
        IconKind::Close => "\u{f00d}",          // nf-fa-close
    }
}

fn unicode(kind: IconKind) -> &'static str {
    match kind {
        IconKind::AcademicCap => "\u{2726}",    // ✦
        IconKind::Briefcase => "\u{25a3}",      // ▣
        IconKind::News => "\u{2261}",           // ≡
        IconKind::BookOpen => "\u{00a7}",       // §
        IconKind::UserCircle => "\u{25c9}",     // ◉
        IconKind::Heart => "\u{2665}",          // ♥
        IconKind::Gift => "\u{2756}",           // ❖
        IconKind::Users => "\u{25ce}",          // ◎
        IconKind::BuildingOffice => "\u{25a4}", // ▤
        IconKind::Mail => "\u{2709}",           // ✉
        IconKind::LinkedIn => "in",
        IconKind::ResearchGate => "RG",
        IconKind::Orcid => "iD",
        IconKind::Sun => "\u{2600}",            // ☀
        IconKind::Moon => "\u{263e}",           // ☾
        IconKind::Close => "x",
    }
}
