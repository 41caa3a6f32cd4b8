//! Page view-state: which section is active, whether the mobile menu is
//! open, and whether the project details are expanded.
//!
//! Everything here is plain data with total transitions so it can be
//! exercised without a renderer. The reactive wrapper lives in
//! `app::state`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the five navigable regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    About,
    Skills,
    Project,
    Resume,
    Contact,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Project,
        Section::Resume,
        Section::Contact,
    ];

    /// Anchor identifier, used as the DOM id of the section's panel.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Project => "project",
            Section::Resume => "resume",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Project => "Project",
            Section::Resume => "Resume",
            Section::Contact => "Contact",
        }
    }

    /// In-page link to the section's anchor.
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0:?}")]
pub struct ParseSectionError(pub String);

impl FromStr for Section {
    type Err = ParseSectionError;

    /// Accepts a bare identifier or a URL fragment (`#contact`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        Section::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub active_section: Section,
    pub menu_open: bool,
    pub project_expanded: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-selecting the active section is a no-op.
    pub fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    pub fn toggle_menu_open(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_project_expanded(&mut self) {
        self.project_expanded = !self.project_expanded;
    }

    /// A choice made from the mobile menu selects the section and hides
    /// the menu.
    pub fn navigate_from_menu(&mut self, section: Section) {
        self.set_active_section(section);
        self.close_menu();
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }
}
