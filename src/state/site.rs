//! Typed model of the generated site manifest.
//!
//! DESIGN
//! ======
//! The generator emits a `site-index.json` next to its other static assets
//! describing the navigation tree and the component catalog. Every field
//! defaults so a partial or empty manifest still deserializes; missing
//! sections simply render nothing.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use serde::{Deserialize, Serialize};

use super::filter::{FilterQuery, Filterable};

/// Everything the interactive layer needs to know about the generated site.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteIndex {
    /// Project name shown in the header and the page title.
    #[serde(default)]
    pub project_name: String,
    /// Pre-rendered overview body (generator-produced HTML).
    #[serde(default)]
    pub overview_html: String,
    /// Sidebar navigation: flat links are groups with no items.
    #[serde(default)]
    pub nav: Vec<NavGroup>,
    /// Component catalog rendered as the card grid on the overview page.
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

/// One sidebar group: a labelled link plus optional child links.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavGroup {
    /// Group heading, also matched by the sidebar filter.
    pub label: String,
    /// Where the heading itself links, when it is a page of its own.
    #[serde(default)]
    pub href: Option<String>,
    /// Child links; empty for flat top-level entries.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl NavGroup {
    /// A group stays visible when its own label matches or when any child
    /// does: hiding a group must never hide a matching descendant.
    pub fn is_revealed(&self, query: &FilterQuery) -> bool {
        query.matches(self) || self.items.iter().any(|item| query.matches(item))
    }
}

impl Filterable for NavGroup {
    fn search_text(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.label.as_str())
    }
}

/// One link inside a sidebar group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Link text, matched by the sidebar filter.
    pub label: String,
    /// Link target relative to the site root.
    pub href: String,
}

impl Filterable for NavItem {
    fn search_text(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.label.as_str())
    }
}

/// One card in the component catalog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Component name, shown as the card title.
    pub title: String,
    /// Short summary shown under the title.
    #[serde(default)]
    pub description: String,
    /// Link target for the component's page.
    pub href: String,
}

impl Filterable for ComponentEntry {
    fn search_text(&self) -> impl Iterator<Item = &str> {
        [self.title.as_str(), self.description.as_str()].into_iter()
    }
}
