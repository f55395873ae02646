//! Screen layout definitions for the TUI
//!
//! Landing page, top to bottom: header, nav bar, card grid, footer. The
//! about card spans the full width; the remaining cards flow into as many
//! columns as the terminal width allows.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width from which the secondary cards sit side by side in two columns
pub const TWO_COLUMN_MIN_WIDTH: u16 = 80;

/// Width from which the secondary cards get three columns
pub const THREE_COLUMN_MIN_WIDTH: u16 = 120;

const HEADER_HEIGHT: u16 = 4;
const NAV_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Screen areas for the landing page
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Name, subtitle and theme toggle
    pub header: Rect,
    pub nav: Rect,
    /// Card grid
    pub main: Rect,
    /// Contact icons and copyright
    pub footer: Rect,
}

/// Create the landing page layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(NAV_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        nav: chunks[1],
        main: chunks[2],
        footer: chunks[3],
    }
}

/// Columns for the secondary cards at a given width
pub fn card_columns(width: u16) -> usize {
    if width >= THREE_COLUMN_MIN_WIDTH {
        3
    } else if width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Split the card area: the first card spans the full width, the rest are
/// laid out row by row in `card_columns(area.width)` columns.
pub fn card_grid(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || area.height == 0 {
        return Vec::new();
    }

    let rest = count - 1;
    let columns = card_columns(area.width);
    let rows = 1 + rest.div_ceil(columns);

    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);

    let mut cells = vec![row_areas[0]];
    for (row, row_area) in row_areas.iter().enumerate().skip(1) {
        let in_row = (rest - (row - 1) * columns).min(columns);
        let cols = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        cells.extend(cols.iter().take(in_row).copied());
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create(area);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.nav.y, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.footer.y, 40 - FOOTER_HEIGHT);
        assert_eq!(
            layout.main.height,
            40 - HEADER_HEIGHT - NAV_HEIGHT - FOOTER_HEIGHT
        );
    }

    #[test]
    fn test_card_columns() {
        assert_eq!(card_columns(60), 1);
        assert_eq!(card_columns(80), 2);
        assert_eq!(card_columns(119), 2);
        assert_eq!(card_columns(160), 3);
    }

    #[test]
    fn test_card_grid_wide() {
        let area = Rect::new(0, 0, 120, 20);
        let cells = card_grid(area, 4);

        assert_eq!(cells.len(), 4);
        // About spans the full width
        assert_eq!(cells[0].width, 120);
        // Three secondary cards share one row
        assert_eq!(cells[1].y, cells[3].y);
        assert_eq!(cells[1].width, 40);
    }

    #[test]
    fn test_card_grid_two_columns() {
        let area = Rect::new(0, 0, 90, 30);
        let cells = card_grid(area, 4);

        assert_eq!(cells.len(), 4);
        assert_eq!(cells[1].y, cells[2].y);
        assert!(cells[3].y > cells[2].y);
        assert_eq!(cells[3].width, 45);
    }

    #[test]
    fn test_card_grid_narrow_stacks() {
        let area = Rect::new(0, 0, 40, 40);
        let cells = card_grid(area, 4);

        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|c| c.width == 40));
        assert!(cells.windows(2).all(|w| w[0].y < w[1].y));
    }

    #[test]
    fn test_card_grid_empty() {
        assert!(card_grid(Rect::new(0, 0, 80, 20), 0).is_empty());
        assert!(card_grid(Rect::new(0, 0, 80, 0), 4).is_empty());
    }
}
