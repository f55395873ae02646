//! Semantic style builders over a [`Palette`].

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn text_bright_bold(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_bright)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Icon chip next to card titles
pub fn icon_chip(p: &Palette) -> Style {
    Style::default().fg(p.accent).bg(p.accent_soft_bg)
}

pub fn link(p: &Palette) -> Style {
    Style::default()
        .fg(p.link)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn link_marker(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

// --- Selection ---

/// Focused nav entry
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.card_bg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border_dim
        }))
        .style(Style::default().bg(p.card_bg))
}

pub fn modal_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_dim))
        .style(Style::default().bg(p.popup_bg))
}
