//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components are organized by screen region so layout concerns stay
//! separate from page content.

pub mod app_shell;
pub mod sidebar;
pub mod top_bar;
