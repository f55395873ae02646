//! Custom widget components

pub mod content;
mod footer;
mod header;
pub mod modal_overlay;
mod nav_bar;
mod section_card;
mod section_modal;

pub use content::ContentView;
pub use footer::Footer;
pub use header::MainHeader;
pub use nav_bar::NavBar;
pub use section_card::SectionCard;
pub use section_modal::{modal_layout, ModalLayout, SectionModal};
