use leptos::prelude::*;

use crate::view_state::{Section, ViewState};

/// Reactive handle on the page's [`ViewState`], shared through context.
///
/// Getters track the underlying signal; every transition delegates to the
/// plain `ViewState` method of the same name.
#[derive(Debug, Clone, Copy)]
pub struct ViewStateStore(RwSignal<ViewState>);

impl ViewStateStore {
    pub fn provide() -> Self {
        let store = Self(RwSignal::new(ViewState::new()));
        provide_context(store);
        store
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn active_section(&self) -> Section {
        self.0.with(|s| s.active_section)
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.0.with(|s| s.is_active(section))
    }

    pub fn menu_open(&self) -> bool {
        self.0.with(|s| s.menu_open)
    }

    pub fn project_expanded(&self) -> bool {
        self.0.with(|s| s.project_expanded)
    }

    pub fn set_active_section(&self, section: Section) {
        log::debug!("active section: {section}");
        self.0.update(|s| s.set_active_section(section));
    }

    pub fn toggle_menu_open(&self) {
        self.0.update(|s| s.toggle_menu_open());
        log::debug!("menu open: {}", self.0.with_untracked(|s| s.menu_open));
    }

    pub fn close_menu(&self) {
        self.0.update(|s| s.close_menu());
    }

    pub fn toggle_project_expanded(&self) {
        self.0.update(|s| s.toggle_project_expanded());
    }

    pub fn navigate_from_menu(&self, section: Section) {
        log::debug!("menu navigation: {section}");
        self.0.update(|s| s.navigate_from_menu(section));
    }

    /// Selects a section and brings its anchor into view once the panel
    /// has been rendered.
    pub fn select_and_scroll(&self, section: Section) {
        self.set_active_section(section);
        request_animation_frame(move || scroll_to_section(section));
    }
}

fn scroll_to_section(section: Section) {
    match document().get_element_by_id(section.id()) {
        Some(el) => el.scroll_into_view(),
        None => log::warn!("no anchor for section {section}"),
    }
}
