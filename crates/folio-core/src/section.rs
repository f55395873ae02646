//! Section definitions and the opaque content payloads they carry
//!
//! Everything here is literal reference data. Controllers hand a
//! [`SectionDefinition`] to the renderer without looking inside its
//! [`ContentBlock`]s.

/// Icon handle resolved to a glyph by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    AcademicCap,
    Briefcase,
    News,
    BookOpen,
    UserCircle,
    Heart,
    Gift,
    Users,
    BuildingOffice,
    Mail,
    LinkedIn,
    ResearchGate,
    Orcid,
    Sun,
    Moon,
    Close,
}

/// A hyperlink with a human label (mailto, profile, charity page, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: Option<IconKind>,
}

impl Link {
    pub const fn new(label: &'static str, url: &'static str) -> Self {
        Self {
            label,
            url,
            icon: None,
        }
    }

    pub const fn with_icon(label: &'static str, url: &'static str, icon: IconKind) -> Self {
        Self {
            label,
            url,
            icon: Some(icon),
        }
    }
}

/// A peer-reviewed publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Publication {
    pub title: &'static str,
    pub authors: &'static str,
    pub journal: &'static str,
    pub year: u16,
    pub doi: Option<&'static str>,
}

impl Publication {
    /// Resolvable DOI link, if the publication has an identifier.
    pub fn doi_url(&self) -> Option<String> {
        self.doi.map(doi_url)
    }
}

/// A conference presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conference {
    pub title: &'static str,
    pub authors: &'static str,
    pub event: &'static str,
    pub year: u16,
    pub location: &'static str,
}

/// One entry of the news digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    pub heading: &'static str,
    pub body: &'static str,
    pub citation: &'static str,
    pub doi: Option<&'static str>,
}

/// A position held, with its period and highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub period: &'static str,
    pub project: Option<&'static str>,
    pub highlights: &'static [&'static str],
}

/// Opaque content payload of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentBlock {
    Paragraph(&'static str),
    Heading(&'static str),
    Bullets(&'static [&'static str]),
    Numbered(&'static [&'static str]),
    Publications(&'static [Publication]),
    Conferences(&'static [Conference]),
    News(&'static [NewsItem]),
    Experience(&'static [ExperienceEntry]),
    Links(&'static [Link]),
    Rule,
}

/// A link reachable from inside a section, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub label: String,
    pub url: String,
}

impl ContentBlock {
    /// Links carried by this block, in the order they are drawn.
    pub fn links(&self) -> Vec<LinkTarget> {
        match self {
            ContentBlock::Links(links) => links
                .iter()
                .map(|l| LinkTarget {
                    label: l.label.to_string(),
                    url: l.url.to_string(),
                })
                .collect(),
            ContentBlock::Publications(pubs) => pubs
                .iter()
                .filter_map(|p| {
                    p.doi_url().map(|url| LinkTarget {
                        label: p.title.to_string(),
                        url,
                    })
                })
                .collect(),
            ContentBlock::News(items) => items
                .iter()
                .filter_map(|n| {
                    n.doi.map(|doi| LinkTarget {
                        label: n.heading.to_string(),
                        url: doi_url(doi),
                    })
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// One named unit of static content, shown as a card or a modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: IconKind,
    pub content: &'static [ContentBlock],
}

impl SectionDefinition {
    /// All links of the section, numbered from 1 by the renderer.
    pub fn links(&self) -> Vec<LinkTarget> {
        self.content.iter().flat_map(ContentBlock::links).collect()
    }
}

fn doi_url(doi: &str) -> String {
    format!("https://doi.org/{}", doi)
}
