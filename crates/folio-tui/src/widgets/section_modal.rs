//! Section detail modal
//!
//! Draws over the landing page: dims the page, then a centered bordered
//! surface with the section title, the scrolled content body, a close
//! button on the top border and a key hint on the last row.

use folio_core::SectionDefinition;
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    text::{Line, Span},
    widgets::{Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::content::ContentView;
use super::modal_overlay;
use crate::theme::{styles, IconSet, Palette};

/// Widest the modal surface gets
const MAX_MODAL_WIDTH: u16 = 96;

const CLOSE_LABEL: &str = "[x]";
const KEY_HINT: &str = "↑↓ scroll · 1-9 open link · Esc close";

/// Screen regions of an open modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    /// Bordered modal surface
    pub surface: Rect,
    /// Close button on the top border
    pub close: Rect,
    /// Scrollable content area
    pub body: Rect,
    /// Key hint row under the body
    pub hint: Rect,
}

/// Compute where the modal goes inside `area`.
pub fn modal_layout(area: Rect) -> ModalLayout {
    let width = area.width.saturating_sub(4).min(MAX_MODAL_WIDTH);
    let height = area.height.saturating_sub(2);
    let surface = modal_overlay::centered(area, width, height);

    let close_width = CLOSE_LABEL.len() as u16;
    let close = if surface.width > close_width + 4 {
        Rect::new(surface.right() - close_width - 2, surface.y, close_width, 1)
    } else {
        Rect::default()
    };

    let inner = surface.inner(Margin::new(1, 1));
    let body = Rect::new(
        inner.x.saturating_add(1),
        inner.y,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    );
    let hint = if inner.height > 0 {
        Rect::new(body.x, inner.bottom() - 1, body.width, 1)
    } else {
        Rect::default()
    };

    ModalLayout {
        surface,
        close,
        body,
        hint,
    }
}

/// Modal rendering one section's content at a scroll offset
pub struct SectionModal<'a> {
    section: &'a SectionDefinition,
    view: &'a ContentView,
    offset: usize,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> SectionModal<'a> {
    pub fn new(
        section: &'a SectionDefinition,
        view: &'a ContentView,
        palette: &'a Palette,
        icons: IconSet,
    ) -> Self {
        Self {
            section,
            view,
            offset: 0,
            palette,
            icons,
        }
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    fn position_label(&self, body_height: usize) -> Option<String> {
        let total = self.view.height();
        if total <= body_height {
            return None;
        }
        let end = (self.offset + body_height).min(total);
        Some(format!("{}-{}/{}", self.offset + 1, end, total))
    }
}

impl Widget for SectionModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let layout = modal_layout(area);

        modal_overlay::dim(buf, area, p);
        if layout.surface.width < 4 || layout.surface.height < 3 {
            return;
        }
        modal_overlay::drop_shadow(buf, layout.surface, p);
        Clear.render(layout.surface, buf);

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.get(self.section.icon), styles::accent(p)),
            Span::raw(" "),
            Span::styled(self.section.title, styles::text_bright_bold(p)),
            Span::raw(" "),
        ]);
        styles::modal_block(p)
            .title(title)
            .render(layout.surface, buf);

        if layout.close.width > 0 {
            let close = Line::from(Span::styled(CLOSE_LABEL, styles::accent_bold(p)));
            buf.set_line(layout.close.x, layout.close.y, &close, layout.close.width);
        }

        let body = layout.body;
        for (row, line) in self
            .view
            .lines
            .iter()
            .skip(self.offset)
            .take(body.height as usize)
            .enumerate()
        {
            buf.set_line(body.x, body.y + row as u16, line, body.width);
        }

        if layout.hint.width > 0 {
            let hint = Line::from(Span::styled(KEY_HINT, styles::text_muted(p)));
            buf.set_line(layout.hint.x, layout.hint.y, &hint, layout.hint.width);

            if let Some(position) = self.position_label(body.height as usize) {
                let width = position.width() as u16;
                if width < layout.hint.width {
                    let x = layout.hint.right() - width;
                    let line = Line::from(Span::styled(position, styles::accent(p)));
                    buf.set_line(x, layout.hint.y, &line, width);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::{DARK, LIGHT};
    use folio_app::config::IconMode;
    use folio_app::SectionRegistry;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_modal_layout_is_centered_and_capped() {
        let layout = modal_layout(Rect::new(0, 0, 200, 40));
        assert_eq!(layout.surface.width, MAX_MODAL_WIDTH);
        assert_eq!(layout.surface.height, 38);
        assert_eq!(layout.surface.x, (200 - MAX_MODAL_WIDTH) / 2);
        assert_eq!(layout.surface.y, 1);
    }

    #[test]
    fn test_modal_layout_regions_nest() {
        let layout = modal_layout(Rect::new(0, 0, 80, 24));
        let s = layout.surface;

        assert_eq!(layout.close.y, s.y);
        assert!(layout.close.right() < s.right());
        assert!(layout.body.x > s.x && layout.body.right() < s.right());
        assert!(layout.body.y > s.y);
        assert_eq!(layout.hint.y, layout.body.bottom());
        assert!(layout.hint.bottom() < s.bottom());
    }

    #[test]
    fn test_modal_renders_title_close_and_hint() {
        let registry = SectionRegistry::profile();
        let lab = registry.get("lab").unwrap();
        let area = Rect::new(0, 0, 80, 24);
        let layout = modal_layout(area);
        let view = ContentView::build(lab, layout.body.width, &LIGHT, icons());

        let mut term = TestTerminal::new();
        term.render_widget(SectionModal::new(lab, &view, &LIGHT, icons()), area);

        assert!(term.buffer_contains("The Grassmann Lab"));
        assert!(term.buffer_contains("[x]"));
        assert!(term.buffer_contains("Esc close"));
    }

    #[test]
    fn test_modal_dims_page_outside_surface() {
        let registry = SectionRegistry::profile();
        let funder = registry.get("funder").unwrap();
        let area = Rect::new(0, 0, 80, 24);
        let layout = modal_layout(area);
        let view = ContentView::build(funder, layout.body.width, &DARK, icons());

        let mut term = TestTerminal::new();
        term.render_widget(SectionModal::new(funder, &view, &DARK, icons()), area);

        assert_eq!(term.buffer()[(0, 0)].bg, DARK.backdrop_bg);
        assert_eq!(term.buffer()[(layout.body.x, layout.body.y)].bg, DARK.popup_bg);
    }

    #[test]
    fn test_offset_scrolls_content() {
        let registry = SectionRegistry::profile();
        let news = registry.get("news").unwrap();
        let area = Rect::new(0, 0, 80, 24);
        let layout = modal_layout(area);
        let view = ContentView::build(news, layout.body.width, &LIGHT, icons());
        assert!(view.height() > layout.body.height as usize);

        let mut term = TestTerminal::new();
        term.render_widget(
            SectionModal::new(news, &view, &LIGHT, icons()).offset(3),
            area,
        );

        let expected = view.lines[3].to_string();
        let first_row: String = (layout.body.x..layout.body.right())
            .map(|x| term.buffer()[(x, layout.body.y)].symbol().to_string())
            .collect();
        assert_eq!(first_row.trim_end(), expected.trim_end());
        let position = format!("4-{}/{}", 3 + layout.body.height, view.height());
        assert!(term.buffer_contains(&position));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let registry = SectionRegistry::profile();
        let about = registry.get("about").unwrap();
        let view = ContentView::build(about, 1, &LIGHT, icons());
        let mut term = TestTerminal::with_size(4, 3);
        term.render_widget(
            SectionModal::new(about, &view, &LIGHT, icons()),
            Rect::new(0, 0, 4, 3),
        );
    }
}
