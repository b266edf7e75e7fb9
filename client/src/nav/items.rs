//! Menu entries and grouping.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

/// Section heading in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavHeader {
    pub label: String,
    /// Extra spacing above the heading, for sections after the first.
    #[serde(default)]
    pub margin_top: bool,
}

/// Clickable sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub icon: String,
}

/// One row of the sidebar menu, tagged by `type` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavItem {
    Header(NavHeader),
    Link(NavLink),
}

impl NavItem {
    pub fn header(label: &str, margin_top: bool) -> Self {
        Self::Header(NavHeader { label: label.to_owned(), margin_top })
    }

    pub fn link(label: &str, href: &str, icon: &str) -> Self {
        Self::Link(NavLink { label: label.to_owned(), href: href.to_owned(), icon: icon.to_owned() })
    }
}

/// A heading and the links listed under it.
///
/// Links that appear before any heading form a section with no header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub header: Option<NavHeader>,
    pub links: Vec<NavLink>,
}

/// The dashboard's default menu.
pub fn sidebar_items() -> Vec<NavItem> {
    vec![
        NavItem::header("Dashboard", false),
        NavItem::link("Overview", "/dashboard/overview", "📊"),
        NavItem::link("Trip Planner", "/dashboard/planner", "🗺️"),
        NavItem::link("Attractions Map", "/dashboard/attractions", "🎡"),
        NavItem::header("Member Area", true),
        NavItem::link("Preferences", "/member/preferences", "👤"),
        NavItem::link("Saved Trips", "/member/favorites", "❤️"),
        NavItem::link("Trip Schedule", "/member/schedule", "📅"),
    ]
}

/// Group a flat item list into header-led sections.
pub fn sections(items: &[NavItem]) -> Vec<NavSection> {
    let mut out: Vec<NavSection> = Vec::new();
    for item in items {
        match item {
            NavItem::Header(header) => out.push(NavSection { header: Some(header.clone()), links: Vec::new() }),
            NavItem::Link(link) => match out.last_mut() {
                Some(section) => section.links.push(link.clone()),
                None => out.push(NavSection { header: None, links: vec![link.clone()] }),
            },
        }
    }
    out
}

/// Whether `current_path` is `href` or a page nested beneath it.
pub fn is_active(href: &str, current_path: &str) -> bool {
    let href = href.trim_end_matches('/');
    let current = current_path.trim_end_matches('/');
    if href.is_empty() {
        return current.is_empty();
    }
    current == href || current.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}
