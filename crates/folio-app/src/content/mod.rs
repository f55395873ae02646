//! Literal profile content
//!
//! Every section the site shows is defined here as static data. The
//! registry wraps these definitions; nothing else reads the blocks except
//! the renderer.

mod news;
mod profile;
mod publications;
mod research;

use folio_core::{IconKind, SectionDefinition};

pub use profile::{CONTACT_LINKS, OWNER_NAME, OWNER_TAGLINE};
pub use publications::{CONFERENCES, PUBLICATIONS};

pub const RESEARCH: SectionDefinition = SectionDefinition {
    id: "research",
    title: "Current Research",
    icon: IconKind::Briefcase,
    content: research::RESEARCH,
};

pub const EXPERIENCE: SectionDefinition = SectionDefinition {
    id: "experience",
    title: "Research & Industry Experience",
    icon: IconKind::BuildingOffice,
    content: profile::EXPERIENCE,
};

pub const NEWS: SectionDefinition = SectionDefinition {
    id: "news",
    title: "Scientific News & Insights",
    icon: IconKind::News,
    content: news::NEWS,
};

pub const PUBLICATIONS_SECTION: SectionDefinition = SectionDefinition {
    id: "publications",
    title: "Publications & Conferences",
    icon: IconKind::BookOpen,
    content: publications::PUBLICATIONS_SECTION,
};

pub const LAB: SectionDefinition = SectionDefinition {
    id: "lab",
    title: "The Grassmann Lab",
    icon: IconKind::Users,
    content: profile::LAB,
};

pub const ABOUT: SectionDefinition = SectionDefinition {
    id: "about",
    title: "About Me & Contact",
    icon: IconKind::UserCircle,
    content: profile::ABOUT,
};

pub const FUNDER: SectionDefinition = SectionDefinition {
    id: "funder",
    title: "My Funder",
    icon: IconKind::Heart,
    content: profile::FUNDER,
};

pub const DONATE: SectionDefinition = SectionDefinition {
    id: "donate",
    title: "Support Eye Research",
    icon: IconKind::Gift,
    content: profile::DONATE,
};

/// All sections in registry order.
pub const ALL_SECTIONS: [SectionDefinition; 8] = [
    RESEARCH,
    EXPERIENCE,
    NEWS,
    PUBLICATIONS_SECTION,
    LAB,
    ABOUT,
    FUNDER,
    DONATE,
];

/// Copyright line shown in the footer.
pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, OWNER_NAME)
}
