//! Event delegation by element id.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controls that are re-rendered by the router are not bound directly.
//! A single document-level listener asks, for every event, whether the
//! target or one of its ancestors is the control.

#[cfg(test)]
#[path = "delegation_test.rs"]
mod delegation_test;

/// A node that can be walked towards the document root.
pub trait DelegationNode: Sized {
    /// Whether this node's `id` attribute equals `id`.
    fn has_id(&self, id: &str) -> bool;

    /// The enclosing element, if any.
    fn parent(&self) -> Option<Self>;
}

/// Return `start` or its nearest ancestor whose id is `id`.
///
/// An empty `id` never matches.
pub fn closest_with_id<N: DelegationNode>(start: N, id: &str) -> Option<N> {
    if id.is_empty() {
        return None;
    }
    let mut current = Some(start);
    while let Some(node) = current {
        if node.has_id(id) {
            return Some(node);
        }
        current = node.parent();
    }
    None
}

/// Whether `start` is the element with `id` or is nested inside it.
pub fn is_within<N: DelegationNode>(start: N, id: &str) -> bool {
    closest_with_id(start, id).is_some()
}

/// Whether the event target is the element with `id` itself.
///
/// Used for events that bubble from descendants but only count when they
/// originate on the element, such as `transitionend`.
pub fn is_target<N: DelegationNode>(target: Option<N>, id: &str) -> bool {
    !id.is_empty() && target.is_some_and(|node| node.has_id(id))
}

#[cfg(feature = "hydrate")]
impl DelegationNode for web_sys::Element {
    fn has_id(&self, id: &str) -> bool {
        self.id() == id
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }
}
