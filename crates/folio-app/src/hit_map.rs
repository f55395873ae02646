//! Click regions recorded by the renderer
//!
//! The renderer clears the map at the start of each frame and records a
//! region for every clickable element it draws, in paint order. A click
//! resolves to the last recorded region containing the point, which is the
//! one painted on top. This keeps mouse handling independent of the
//! terminal library.

/// A rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && (column as u32) < self.x as u32 + self.width as u32
            && (row as u32) < self.y as u32 + self.height as u32
    }
}

/// What a click on a region means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// Dimmed area around an open modal
    Backdrop,
    /// The modal panel itself; clicks here never reach the backdrop
    ModalSurface,
    /// The `[x]` control on the modal border
    ModalClose,
    /// Nav bar entry for a section
    Nav(String),
    /// Landing card for a section
    Card(String),
    ThemeToggle,
    Link(String),
}

#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Region, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn record(&mut self, region: Region, target: HitTarget) {
        if region.width > 0 && region.height > 0 {
            self.regions.push((region, target));
        }
    }

    /// Topmost target under the point.
    pub fn hit(&self, column: u16, row: u16) -> Option<&HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(region, _)| region.contains(column, row))
            .map(|(_, target)| target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
