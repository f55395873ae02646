//! Header bar widget
//!
//! Owner name and subtitle on the left, the theme toggle on the right.

use folio_core::{IconKind, ThemePreference};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, IconSet, Palette};

/// Main header showing the site owner and the theme toggle
pub struct MainHeader<'a> {
    name: &'a str,
    tagline: &'a str,
    theme: ThemePreference,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(
        name: &'a str,
        tagline: &'a str,
        theme: ThemePreference,
        palette: &'a Palette,
        icons: IconSet,
    ) -> Self {
        Self {
            name,
            tagline,
            theme,
            palette,
            icons,
        }
    }

    fn toggle_label(&self) -> String {
        let target = match self.theme {
            ThemePreference::Light => "Dark",
            ThemePreference::Dark => "Light",
        };
        format!(" {} {} ", self.icons.theme_toggle(self.theme), target)
    }

    /// Cells covered by the theme toggle when rendered into `area`.
    pub fn toggle_area(&self, area: Rect) -> Rect {
        let inner = styles::glass_block(self.palette, false).inner(area);
        if inner.height == 0 {
            return Rect::default();
        }
        let width = (self.toggle_label().width() as u16).min(inner.width);
        Rect::new(
            inner.x + inner.width - width,
            inner.y,
            width,
            1,
        )
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let p = self.palette;
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.get(IconKind::AcademicCap), styles::accent(p)),
            Span::raw(" "),
            Span::styled(self.name, styles::text_bright_bold(p)),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        if inner.height > 1 {
            let subtitle = Line::from(vec![
                Span::raw("   "),
                Span::styled(self.tagline, styles::text_muted(p)),
            ]);
            buf.set_line(inner.x, inner.y + 1, &subtitle, inner.width);
        }

        let toggle = self.toggle_area(area);
        let label = Line::from(Span::styled(
            self.toggle_label(),
            Style::default().fg(p.text_muted).bg(p.page_bg),
        ));
        buf.set_line(toggle.x, toggle.y, &label, toggle.width);
    }
}
