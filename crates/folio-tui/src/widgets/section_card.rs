//! Landing page card: icon, title and a clipped preview of the section

use folio_core::SectionDefinition;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::content::ContentView;
use crate::theme::{styles, IconSet, Palette};

pub struct SectionCard<'a> {
    section: &'a SectionDefinition,
    focused: bool,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> SectionCard<'a> {
    pub fn new(section: &'a SectionDefinition, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            section,
            focused: false,
            palette,
            icons,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SectionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" {} ", self.icons.get(self.section.icon)),
                styles::icon_chip(p),
            ),
            Span::raw(" "),
            Span::styled(self.section.title, styles::text_bright_bold(p)),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        // Title, spacer, preview, hint
        if inner.height < 3 {
            return;
        }
        let body = Rect::new(
            inner.x + 1,
            inner.y + 2,
            inner.width - 2,
            inner.height - 2,
        );

        let preview = ContentView::build(self.section, body.width, p, self.icons);
        let truncated = preview.height() > body.height as usize;
        let visible = if truncated {
            body.height.saturating_sub(1)
        } else {
            body.height
        };

        for (row, line) in preview.lines.iter().take(visible as usize).enumerate() {
            buf.set_line(body.x, body.y + row as u16, line, body.width);
        }

        if truncated {
            let hint = if self.focused {
                "… Enter to read more"
            } else {
                "…"
            };
            let line = Line::from(Span::styled(hint, styles::text_muted(p)));
            buf.set_line(body.x, body.y + body.height - 1, &line, body.width);
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

    #[test]
    fn test_card_renders_title_and_preview() {
        let registry = SectionRegistry::profile();
        let funder = registry.get("funder").unwrap();
        let mut term = TestTerminal::new();
        let card = SectionCard::new(funder, &LIGHT, IconSet::new(IconMode::Unicode));
        term.render_widget(card, Rect::new(0, 0, 60, 12));

        assert!(term.buffer_contains("My Funder"));
        assert!(term.buffer_contains("proudly funded"));
    }

    #[test]
    fn test_long_card_is_truncated_with_hint() {
        let registry = SectionRegistry::profile();
        let about = registry.get("about").unwrap();
        let mut term = TestTerminal::new();
        let card = SectionCard::new(about, &DARK, IconSet::new(IconMode::Unicode)).focused(true);
        term.render_widget(card, Rect::new(0, 0, 60, 8));

        assert!(term.buffer_contains("About Me & Contact"));
        assert!(term.buffer_contains("Enter to read more"));
    }

    #[test]
    fn test_focused_card_border_uses_accent() {
        let registry = SectionRegistry::profile();
        let lab = registry.get("lab").unwrap();
        let mut term = TestTerminal::new();
        let card = SectionCard::new(lab, &LIGHT, IconSet::new(IconMode::Unicode)).focused(true);
        term.render_widget(card, Rect::new(0, 0, 40, 10));

        assert_eq!(term.buffer()[(0, 5)].fg, LIGHT.border_active);
    }
}
