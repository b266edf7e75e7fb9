//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Presentation preferences that outlive a page load are modeled as small
//! closed types with explicit storage encodings.

pub mod sidebar;
