//! Sidebar toggle controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard stylesheet collapses the sidebar whenever the marker class
//! is on `<body>`. This controller flips that class when the toggle control
//! is clicked, persists the result, and on page load re-applies a stored
//! collapsed preference.
//!
//! Charts embedded in the page size themselves from the viewport, so after
//! each toggle a synthetic window `resize` is scheduled for when the layout
//! transition has finished. Pending resizes are never cancelled; toggling
//! twice quickly schedules two independent dispatches.
//!
//! The environment is reached only through [`SidebarHost`], implemented for
//! the browser in `sidebar_dom` and in memory by the tests.

use crate::state::sidebar::SidebarState;
use crate::util::delegation::{DelegationNode, is_within};
use crate::util::sidebar_config::{ResizeStrategy, SidebarConfig};

#[cfg(test)]
#[path = "sidebar_toggle_test.rs"]
mod sidebar_toggle_test;

/// Failures reported by a [`SidebarHost`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SidebarError {
    /// A required browser object (window, document, body, storage) is missing.
    #[error("{0} unavailable")]
    Unavailable(&'static str),

    /// Reading or writing the persisted preference failed.
    #[error("storage failed: {0}")]
    Storage(String),

    /// A DOM call threw.
    #[error("dom operation failed: {0}")]
    Dom(String),
}

/// Environment operations the controller depends on.
pub trait SidebarHost {
    /// Whether the root container currently carries `class`.
    fn has_marker(&self, class: &str) -> Result<bool, SidebarError>;

    /// Add `class` if absent, remove it if present.
    fn toggle_marker(&self, class: &str) -> Result<(), SidebarError>;

    /// Add `class`. Adding a class that is already present is a no-op.
    fn add_marker(&self, class: &str) -> Result<(), SidebarError>;

    fn read_preference(&self, key: &str) -> Result<Option<String>, SidebarError>;

    fn write_preference(&self, key: &str, value: &str) -> Result<(), SidebarError>;

    /// Arrange for exactly one window `resize` dispatch per call.
    fn schedule_resize(&self, strategy: ResizeStrategy);
}

/// Owns the sidebar config and drives a host.
#[derive(Debug)]
pub struct SidebarController<H> {
    host: H,
    config: SidebarConfig,
}

impl<H: SidebarHost> SidebarController<H> {
    pub fn new(host: H, config: SidebarConfig) -> Self {
        Self { host, config }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    /// Handle a click that bubbled to the document.
    ///
    /// Returns `Ok(None)` when the click did not land on or inside the
    /// toggle control, and the new state otherwise.
    ///
    /// # Errors
    ///
    /// Returns the host error if the class list or storage write fails. A
    /// failed storage write leaves the class flipped and the resize
    /// scheduled.
    pub fn handle_click<N: DelegationNode>(&self, target: Option<N>) -> Result<Option<SidebarState>, SidebarError> {
        let Some(target) = target else {
            return Ok(None);
        };
        if !is_within(target, &self.config.toggle_id) {
            return Ok(None);
        }
        self.toggle().map(Some)
    }

    /// Flip the marker class, schedule the resize, and persist the result.
    ///
    /// # Errors
    ///
    /// See [`SidebarController::handle_click`].
    pub fn toggle(&self) -> Result<SidebarState, SidebarError> {
        let class = self.config.marker_class.as_str();
        self.host.toggle_marker(class)?;
        self.host.schedule_resize(self.config.resize);

        // Persist what the DOM now shows, not what we think we flipped from.
        let state = SidebarState::from_marker(self.host.has_marker(class)?);
        self.host.write_preference(&self.config.storage_key, state.as_str())?;
        Ok(state)
    }

    /// Re-apply a stored collapsed preference on page load.
    ///
    /// Unreadable storage is treated as no stored value. Never schedules a
    /// resize.
    ///
    /// # Errors
    ///
    /// Returns the host error if adding the marker class fails.
    pub fn restore(&self) -> Result<SidebarState, SidebarError> {
        let stored = self.host.read_preference(&self.config.storage_key).ok().flatten();
        let state = SidebarState::from_stored(stored.as_deref());
        if state.is_collapsed() {
            self.host.add_marker(&self.config.marker_class)?;
        }
        Ok(state)
    }
}
