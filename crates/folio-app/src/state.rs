//! Application state (Model in TEA pattern)

use folio_core::{SectionDefinition, ThemePreference};

use crate::config::Settings;
use crate::hit_map::HitMap;
use crate::modal::ModalController;
use crate::modal_view_state::ModalViewState;
use crate::registry::SectionRegistry;

/// Lifecycle of the UI loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Where a focusable landing-page entry lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusArea {
    Nav,
    Card,
}

/// One stop of the focus cursor on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTarget {
    pub area: FocusArea,
    pub key: &'static str,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Presentation flag read by the styling layer
    pub theme: ThemePreference,

    pub modal: ModalController,

    /// Index into [`AppState::focus_targets`]
    pub focus: usize,

    pub modal_view: ModalViewState,

    pub settings: Settings,

    pub registry: SectionRegistry,

    /// Click regions of the last drawn frame
    pub hit_map: HitMap,
}

impl AppState {
    pub fn new(theme: ThemePreference, settings: Settings) -> Self {
        Self::with_registry(theme, settings, SectionRegistry::profile())
    }

    pub fn with_registry(
        theme: ThemePreference,
        settings: Settings,
        registry: SectionRegistry,
    ) -> Self {
        Self {
            phase: AppPhase::Running,
            theme,
            modal: ModalController::new(),
            focus: 0,
            modal_view: ModalViewState::new(),
            settings,
            registry,
            hit_map: HitMap::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Section currently shown in the overlay, if any.
    pub fn active_section(&self) -> Option<&SectionDefinition> {
        self.modal.render(&self.registry)
    }

    /// Focus stops in tab order: nav entries, then landing cards.
    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        let nav = self.registry.nav_sections().into_iter().map(|e| FocusTarget {
            area: FocusArea::Nav,
            key: e.key,
        });
        let cards = self
            .registry
            .card_sections()
            .into_iter()
            .map(|s| FocusTarget {
                area: FocusArea::Card,
                key: s.id,
            });
        nav.chain(cards).collect()
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus_targets().get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        let count = self.focus_targets().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.focus_targets().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Open a section, resetting the body scroll when the section changes.
    pub fn open_section(&mut self, key: &str) {
        if self.modal.active() != Some(key) {
            self.modal_view.reset();
        }
        self.modal.open(key);
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
        self.modal_view.reset();
    }
}
