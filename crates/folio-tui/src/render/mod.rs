//! Main render/view function (View in TEA pattern)


use chrono::Datelike;
use folio_app::content::{copyright_line, CONTACT_LINKS, OWNER_NAME, OWNER_TAGLINE};
use folio_app::state::{AppState, FocusArea, FocusTarget};
use folio_app::{HitTarget, Region};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{palette, IconSet, Palette};

fn region(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}

/// Render the complete UI (View function in TEA)
///
/// Besides drawing, this records the click regions of the frame in
/// `state.hit_map` and tells the modal scroll state how tall the open
/// section is at the current width.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let palette = palette::for_theme(state.theme);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(Block::default().style(Style::default().bg(palette.page_bg)), area);
    state.hit_map.clear();

    render_landing(frame, state, palette, icons);
    render_modal(frame, state, palette, icons);
}

fn render_landing(frame: &mut Frame, state: &mut AppState, palette: &Palette, icons: IconSet) {
    let areas = layout::create(frame.area());
    // Focus is only drawn while the landing page has the keyboard
    let focus: Option<FocusTarget> = if state.active_section().is_some() {
        None
    } else {
        state.focused()
    };

    let header = widgets::MainHeader::new(OWNER_NAME, OWNER_TAGLINE, state.theme, palette, icons);
    let toggle = header.toggle_area(areas.header);
    frame.render_widget(header, areas.header);
    state.hit_map.record(region(toggle), HitTarget::ThemeToggle);

    let entries = state.registry.nav_sections();
    let focused_entry = focus
        .filter(|f| f.area == FocusArea::Nav)
        .and_then(|f| entries.iter().position(|e| e.key == f.key));
    let nav = widgets::NavBar::new(&entries, palette)
        .focused(focused_entry)
        .active(state.modal.active());
    for (cell, key) in nav.entry_areas(areas.nav) {
        state.hit_map.record(region(cell), HitTarget::Nav(key.to_string()));
    }
    frame.render_widget(nav, areas.nav);

    let cards = state.registry.card_sections();
    for (section, cell) in cards
        .iter()
        .zip(layout::card_grid(areas.main, cards.len()))
    {
        let focused = focus.is_some_and(|f| f.area == FocusArea::Card && f.key == section.id);
        frame.render_widget(
            widgets::SectionCard::new(section, palette, icons).focused(focused),
            cell,
        );
        state
            .hit_map
            .record(region(cell), HitTarget::Card(section.id.to_string()));
    }

    let copyright = copyright_line(chrono::Local::now().year());
    let footer = widgets::Footer::new(CONTACT_LINKS, &copyright, palette, icons);
    for (cell, url) in footer.link_areas(areas.footer) {
        state.hit_map.record(region(cell), HitTarget::Link(url.to_string()));
    }
    frame.render_widget(footer, areas.footer);
}

/// Draw the open section, if the active key resolves to one.
fn render_modal(frame: &mut Frame, state: &mut AppState, palette: &Palette, icons: IconSet) {
    let Some(section) = state.modal.render(&state.registry) else {
        return;
    };

    let area = frame.area();
    let modal = widgets::modal_layout(area);
    let content = widgets::ContentView::build(section, modal.body.width, palette, icons);

    state
        .modal_view
        .update_content_size(content.height(), modal.body.height as usize);
    let offset = state.modal_view.offset;

    frame.render_widget(
        widgets::SectionModal::new(section, &content, palette, icons).offset(offset),
        area,
    );

    state.hit_map.record(region(area), HitTarget::Backdrop);
    state
        .hit_map
        .record(region(modal.surface), HitTarget::ModalSurface);
    state
        .hit_map
        .record(region(modal.close), HitTarget::ModalClose);

    let visible = offset..offset + modal.body.height as usize;
    for (row, url) in &content.link_rows {
        if visible.contains(row) {
            let cell = Rect::new(
                modal.body.x,
                modal.body.y + (row - offset) as u16,
                modal.body.width,
                1,
            );
            state.hit_map.record(region(cell), HitTarget::Link(url.clone()));
        }
    }
}
