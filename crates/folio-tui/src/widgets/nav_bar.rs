//! Section navigation bar

use folio_app::NavEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, Palette};

/// Gap between entries
const GAP: u16 = 1;

/// One row of section buttons inside a bordered bar
pub struct NavBar<'a> {
    entries: &'a [NavEntry],
    /// Index of the focused entry, if focus is in the nav bar
    focused: Option<usize>,
    /// Key of the open section, highlighted as current
    active: Option<&'a str>,
    palette: &'a Palette,
}

impl<'a> NavBar<'a> {
    pub fn new(entries: &'a [NavEntry], palette: &'a Palette) -> Self {
        Self {
            entries,
            focused: None,
            active: None,
            palette,
        }
    }

    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    pub fn active(mut self, key: Option<&'a str>) -> Self {
        self.active = key;
        self
    }

    fn label(entry: &NavEntry) -> String {
        format!(" {} ", entry.label)
    }

    /// Cells covered by each entry, in entry order. Entries that do not
    /// fit are left out.
    pub fn entry_areas(&self, area: Rect) -> Vec<(Rect, &'static str)> {
        let inner = styles::glass_block(self.palette, false).inner(area);
        if inner.height == 0 {
            return Vec::new();
        }

        let right = inner.x + inner.width;
        let mut x = inner.x + 1;
        let mut areas = Vec::new();
        for entry in self.entries {
            let width = Self::label(entry).width() as u16;
            if x + width > right {
                break;
            }
            areas.push((Rect::new(x, inner.y, width, 1), entry.key));
            x += width + GAP;
        }
        areas
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false);
        block.render(area, buf);

        let p = self.palette;
        for (i, (cell, key)) in self.entry_areas(area).into_iter().enumerate() {
            let entry = &self.entries[i];
            let style = if self.focused == Some(i) {
                styles::focused_selected(p)
            } else if self.active == Some(key) {
                styles::accent_bold(p).add_modifier(Modifier::UNDERLINED)
            } else {
                styles::text_secondary(p).add_modifier(Modifier::BOLD)
            };
            let line = Line::from(Span::styled(Self::label(entry), style));
            buf.set_line(cell.x, cell.y, &line, cell.width);
        }
    }
}
