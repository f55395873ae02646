//! Section content to terminal lines.
//!
//! Content is pre-wrapped to the target width so every `Line` is exactly
//! one screen row. That keeps scrolling exact and lets the renderer know
//! which row each link landed on.
//!
//! Links are numbered from 1 in the same order as
//! [`SectionDefinition::links`], which is what the digit keys resolve.

use folio_core::{ContentBlock, Link, SectionDefinition};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{styles, IconSet, Palette};

/// Wrapped, styled content of one section.
#[derive(Debug, Default)]
pub struct ContentView {
    pub lines: Vec<Line<'static>>,
    /// `(row, url)` for every row that belongs to a link
    pub link_rows: Vec<(usize, String)>,
    /// Number of links drawn
    pub link_count: usize,
}

impl ContentView {
    /// Lay out `section` for a body `width` cells wide.
    pub fn build(
        section: &SectionDefinition,
        width: u16,
        palette: &Palette,
        icons: IconSet,
    ) -> Self {
        let mut builder = ContentBuilder {
            palette,
            icons,
            width: (width as usize).max(1),
            view: ContentView::default(),
        };
        for block in section.content {
            builder.block(block);
        }
        builder.finish()
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

struct ContentBuilder<'p> {
    palette: &'p Palette,
    icons: IconSet,
    width: usize,
    view: ContentView,
}

impl ContentBuilder<'_> {
    fn finish(mut self) -> ContentView {
        while self
            .view
            .lines
            .last()
            .is_some_and(|line| line.spans.is_empty())
        {
            self.view.lines.pop();
        }
        self.view
    }

    fn blank(&mut self) {
        if self
            .view
            .lines
            .last()
            .is_some_and(|line| !line.spans.is_empty())
        {
            self.view.lines.push(Line::default());
        }
    }

    /// Push `text` wrapped to the width. The first row starts with
    /// `marker`; continuation rows are indented by the marker's width.
    fn text(&mut self, marker: Span<'static>, text: &str, style: Style) -> usize {
        let indent = marker.content.width();
        let rows = wrap(text, self.width.saturating_sub(indent).max(1));
        let first_row = self.view.lines.len();

        for (i, row) in rows.into_iter().enumerate() {
            let lead = if i == 0 {
                marker.clone()
            } else {
                Span::raw(" ".repeat(indent))
            };
            self.view
                .lines
                .push(Line::from(vec![lead, Span::styled(row, style)]));
        }
        first_row
    }

    fn plain(&mut self, text: &str, style: Style) {
        self.text(Span::raw(""), text, style);
    }

    /// Numbered link: `[n] label` then the target underneath.
    fn link(&mut self, label: &str, url: &str, icon: Option<&'static str>) {
        self.view.link_count += 1;
        let marker = Span::styled(
            format!("[{}] ", self.view.link_count),
            styles::link_marker(self.palette),
        );
        let label = match icon {
            Some(icon) => format!("{} {}", icon, label),
            None => label.to_string(),
        };

        let start = self.text(marker, &label, styles::link(self.palette));
        let indent = Span::raw(" ".repeat(format!("[{}] ", self.view.link_count).width()));
        self.text(indent, url, styles::text_muted(self.palette));

        for row in start..self.view.lines.len() {
            self.view.link_rows.push((row, url.to_string()));
        }
    }

    fn block(&mut self, block: &ContentBlock) {
        let p = self.palette;
        match block {
            ContentBlock::Paragraph(text) => {
                self.plain(text, styles::text_primary(p));
                self.blank();
            }
            ContentBlock::Heading(text) => {
                self.blank();
                self.plain(text, styles::accent_bold(p));
                self.blank();
            }
            ContentBlock::Bullets(items) => {
                for item in *items {
                    let marker = Span::styled("• ", styles::accent(p));
                    self.text(marker, item, styles::text_primary(p));
                }
                self.blank();
            }
            ContentBlock::Numbered(items) => {
                let digits = items.len().to_string().len();
                for (i, item) in items.iter().enumerate() {
                    let marker = Span::styled(
                        format!("{:>width$}. ", i + 1, width = digits),
                        styles::text_muted(p),
                    );
                    self.text(marker, item, styles::text_primary(p));
                }
                self.blank();
            }
            ContentBlock::Publications(pubs) => {
                for publication in *pubs {
                    self.plain(publication.title, styles::text_bright_bold(p));
                    self.plain(publication.authors, styles::text_secondary(p));
                    self.plain(
                        &format!("{} ({})", publication.journal, publication.year),
                        styles::text_muted(p).add_modifier(Modifier::ITALIC),
                    );
                    if let Some(url) = publication.doi_url() {
                        self.link("DOI", &url, None);
                    }
                    self.blank();
                }
            }
            ContentBlock::Conferences(conferences) => {
                for conference in *conferences {
                    self.plain(conference.title, styles::text_bright_bold(p));
                    self.plain(conference.authors, styles::text_secondary(p));
                    self.plain(
                        &format!(
                            "{}, {} ({})",
                            conference.event, conference.location, conference.year
                        ),
                        styles::text_muted(p).add_modifier(Modifier::ITALIC),
                    );
                    self.blank();
                }
            }
            ContentBlock::News(items) => {
                for item in *items {
                    self.plain(item.heading, styles::accent_bold(p));
                    self.plain(item.body, styles::text_primary(p));
                    self.plain(
                        item.citation,
                        styles::text_muted(p).add_modifier(Modifier::ITALIC),
                    );
                    if let Some(doi) = item.doi {
                        self.link("DOI", &format!("https://doi.org/{}", doi), None);
                    }
                    self.blank();
                }
            }
            ContentBlock::Experience(entries) => {
                for entry in *entries {
                    self.plain(entry.role, styles::text_bright_bold(p));
                    self.plain(entry.period, styles::accent(p));
                    if let Some(project) = entry.project {
                        self.plain(
                            &format!("Project: {}", project),
                            styles::text_secondary(p).add_modifier(Modifier::ITALIC),
                        );
                    }
                    for highlight in entry.highlights {
                        let marker = Span::styled("• ", styles::accent(p));
                        self.text(marker, highlight, styles::text_primary(p));
                    }
                    self.blank();
                }
            }
            ContentBlock::Links(links) => {
                for Link { label, url, icon } in *links {
                    let icon = icon.map(|kind| self.icons.get(kind));
                    self.link(label, url, icon);
                }
                self.blank();
            }
            ContentBlock::Rule => {
                self.blank();
                self.view.lines.push(Line::from(Span::styled(
                    "─".repeat(self.width),
                    Style::default().fg(p.border_dim),
                )));
                self.blank();
            }
        }
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width && !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed > width {
            rows.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}
