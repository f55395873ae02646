//! Section registry - ordered lookup of every section by its stable key

use folio_core::SectionDefinition;

use crate::content;

/// A navigation entry: the section key plus the short label shown in the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub key: &'static str,
    pub label: &'static str,
}

const NAV: &[NavEntry] = &[
    NavEntry {
        key: "research",
        label: "Research",
    },
    NavEntry {
        key: "experience",
        label: "Experience",
    },
    NavEntry {
        key: "news",
        label: "Insights",
    },
    NavEntry {
        key: "publications",
        label: "Publications",
    },
    NavEntry {
        key: "lab",
        label: "Lab",
    },
    NavEntry {
        key: "about",
        label: "About",
    },
];

const CARDS: &[&str] = &["about", "lab", "funder", "donate"];

/// Immutable, ordered mapping from section key to definition.
///
/// Built once at startup. Lookups are linear; there are only a handful of
/// sections.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<SectionDefinition>,
}

impl SectionRegistry {
    /// Registry over an explicit list of sections, in the given order.
    pub fn new(sections: Vec<SectionDefinition>) -> Self {
        Self { sections }
    }

    /// The researcher profile: all eight sections.
    pub fn profile() -> Self {
        Self::new(content::ALL_SECTIONS.to_vec())
    }

    pub fn get(&self, key: &str) -> Option<&SectionDefinition> {
        self.sections.iter().find(|s| s.id == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionDefinition> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Nav bar entries whose section is registered, in nav order.
    pub fn nav_sections(&self) -> Vec<NavEntry> {
        NAV.iter()
            .copied()
            .filter(|entry| self.contains(entry.key))
            .collect()
    }

    /// Sections shown as cards on the landing grid, in grid order.
    pub fn card_sections(&self) -> Vec<&SectionDefinition> {
        CARDS.iter().filter_map(|key| self.get(key)).collect()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::profile()
    }
}
