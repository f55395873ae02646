//! Backdrop and drop shadow drawn around the section modal

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::Palette;

/// A `width` x `height` rect in the middle of `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Recolour the page under the modal. Glyphs stay, so the landing page
/// still shows through faintly.
pub fn dim(buf: &mut Buffer, area: Rect, palette: &Palette) {
    let area = area.intersection(buf.area);
    buf.set_style(
        area,
        Style::default()
            .fg(palette.backdrop_fg)
            .bg(palette.backdrop_bg),
    );
}

/// One-cell shadow along the right and bottom edges of `surface`.
pub fn drop_shadow(buf: &mut Buffer, surface: Rect, palette: &Palette) {
    let style = Style::default().fg(palette.shadow).bg(palette.shadow);
    let right = Rect::new(surface.right(), surface.y + 1, 1, surface.height);
    let bottom = Rect::new(surface.x + 1, surface.bottom(), surface.width, 1);

    for strip in [right, bottom] {
        for pos in strip.intersection(buf.area).positions() {
            buf[pos].set_char(' ').set_style(style);
        }
    }
}
