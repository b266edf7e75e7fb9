//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from page and component logic.
//! Everything except `sidebar_dom` compiles natively and is unit tested
//! without a browser.

pub mod delegation;
pub mod sidebar_config;
#[cfg(feature = "hydrate")]
pub mod sidebar_dom;
pub mod sidebar_toggle;
