//! Sidebar menu endpoint.

use axum::Json;
use client::nav::{NavItem, sidebar_items};

/// `GET /api/nav` — the sidebar menu as rendered by the client.
pub async fn list_nav() -> Json<Vec<NavItem>> {
    Json(sidebar_items())
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod tests;
