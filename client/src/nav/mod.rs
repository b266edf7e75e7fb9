//! Sidebar navigation model.
//!
//! DESIGN
//! ======
//! The menu is data, not markup: the server exposes it as JSON and the
//! `Sidebar` component renders it, so both read the same list.

pub mod items;

pub use items::{NavHeader, NavItem, NavLink, NavSection, is_active, sections, sidebar_items};
