//! Footer: contact icons and the copyright line

use folio_core::Link;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, IconSet, Palette};

pub struct Footer<'a> {
    links: &'a [Link],
    copyright: &'a str,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> Footer<'a> {
    pub fn new(links: &'a [Link], copyright: &'a str, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            links,
            copyright,
            palette,
            icons,
        }
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(self.palette.border_dim))
    }

    fn label(&self, link: &Link) -> String {
        match link.icon {
            Some(icon) => format!("{} {}", self.icons.get(icon), link.label),
            None => link.label.to_string(),
        }
    }

    /// Cells of each contact link, centered on the first row.
    pub fn link_areas(&self, area: Rect) -> Vec<(Rect, &'static str)> {
        let inner = self.block().inner(area);
        if inner.height == 0 {
            return Vec::new();
        }

        const GAP: u16 = 3;
        let widths: Vec<u16> = self
            .links
            .iter()
            .map(|l| self.label(l).width() as u16)
            .collect();
        let total = widths.iter().sum::<u16>() + GAP * widths.len().saturating_sub(1) as u16;
        let mut x = inner.x + inner.width.saturating_sub(total) / 2;
        let right = inner.x + inner.width;

        let mut areas = Vec::new();
        for (link, width) in self.links.iter().zip(widths) {
            if x + width > right {
                break;
            }
            areas.push((Rect::new(x, inner.y, width, 1), link.url));
            x += width + GAP;
        }
        areas
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let p = self.palette;
        for (link, (cell, _)) in self.links.iter().zip(self.link_areas(area)) {
            let line = Line::from(Span::styled(self.label(link), styles::text_muted(p)));
            buf.set_line(cell.x, cell.y, &line, cell.width);
        }

        if inner.height > 1 {
            let width = self.copyright.width() as u16;
            let x = inner.x + inner.width.saturating_sub(width) / 2;
            let line = Line::from(Span::styled(self.copyright, styles::text_muted(p)));
            buf.set_line(x, inner.y + 1, &line, inner.width);
        }
    }
}
