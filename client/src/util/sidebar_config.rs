//! Sidebar toggle settings.
//!
//! The resize delay mirrors the stylesheet's sidebar transition duration.
//! The server renders it as `data-*` attributes on `<body>`, which only the
//! server-side shell produces, so the server can change it without
//! rebuilding the WASM bundle.

use std::time::Duration;

#[cfg(test)]
#[path = "sidebar_config_test.rs"]
mod sidebar_config_test;

/// `id` of the toggle control.
pub const DEFAULT_TOGGLE_ID: &str = "sidebarToggle";
/// Class added to `<body>` while the sidebar is collapsed.
pub const DEFAULT_MARKER_CLASS: &str = "sb-sidenav-toggled";
/// `localStorage` key holding the preference.
pub const DEFAULT_STORAGE_KEY: &str = "sb|sidebar-toggle";
/// `id` of the sidebar container whose `transitionend` marks the layout as settled.
pub const DEFAULT_TRANSITION_TARGET_ID: &str = "layoutSidenav_nav";
/// Matches the sidebar CSS transition duration.
pub const DEFAULT_RESIZE_DELAY_MS: u64 = 300;

pub const DATA_RESIZE_STRATEGY: &str = "data-resize-strategy";
pub const DATA_RESIZE_DELAY_MS: &str = "data-resize-delay-ms";

/// When the synthetic `resize` event fires after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeStrategy {
    /// Fixed one-shot timer.
    Delay(Duration),
    /// First `transitionend` on the sidebar container, or `fallback` if no
    /// transition finishes first.
    TransitionEnd { fallback: Duration },
}

impl Default for ResizeStrategy {
    fn default() -> Self {
        Self::Delay(Duration::from_millis(DEFAULT_RESIZE_DELAY_MS))
    }
}

impl ResizeStrategy {
    /// Name used in configuration and in `data-resize-strategy`.
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Delay(_) => "delay",
            Self::TransitionEnd { .. } => "transitionend",
        }
    }

    /// Timer duration: the delay itself, or the fallback.
    pub const fn delay(self) -> Duration {
        match self {
            Self::Delay(delay) | Self::TransitionEnd { fallback: delay } => delay,
        }
    }

    /// Delay in whole milliseconds, saturating at `u32::MAX` for timer APIs.
    pub fn delay_millis(self) -> u32 {
        u32::try_from(self.delay().as_millis()).unwrap_or(u32::MAX)
    }

    /// Build a strategy from its kind name and delay.
    ///
    /// Returns `None` for an unknown kind.
    pub fn from_kind(kind: &str, delay: Duration) -> Option<Self> {
        match kind {
            "delay" => Some(Self::Delay(delay)),
            "transitionend" => Some(Self::TransitionEnd { fallback: delay }),
            _ => None,
        }
    }

    /// Lenient parse of the `data-*` attribute pair.
    ///
    /// Missing or malformed parts fall back to the defaults individually.
    pub fn from_data_attrs(kind: Option<&str>, delay_ms: Option<&str>) -> Self {
        let delay = delay_ms
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map_or(Self::default().delay(), Duration::from_millis);
        kind.and_then(|kind| Self::from_kind(kind.trim(), delay))
            .unwrap_or(Self::Delay(delay))
    }
}

/// Everything the controller needs to find its control and its storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarConfig {
    pub toggle_id: String,
    pub marker_class: String,
    pub storage_key: String,
    /// Only `transitionend` events targeting this element end the layout change.
    pub transition_target_id: String,
    pub resize: ResizeStrategy,
}

/// Something that carries `data-*` attributes.
pub trait DataAttrs {
    fn data_attr(&self, name: &str) -> Option<String>;
}

#[cfg(feature = "hydrate")]
impl DataAttrs for web_sys::Element {
    fn data_attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            marker_class: DEFAULT_MARKER_CLASS.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            transition_target_id: DEFAULT_TRANSITION_TARGET_ID.to_owned(),
            resize: ResizeStrategy::default(),
        }
    }
}

impl SidebarConfig {
    #[must_use]
    pub fn with_resize(mut self, resize: ResizeStrategy) -> Self {
        self.resize = resize;
        self
    }

    /// Default config with the resize strategy read from `source`, normally
    /// the server-rendered `<body>`.
    pub fn from_data_attrs<A: DataAttrs>(source: &A) -> Self {
        let kind = source.data_attr(DATA_RESIZE_STRATEGY);
        let delay = source.data_attr(DATA_RESIZE_DELAY_MS);
        Self::default().with_resize(ResizeStrategy::from_data_attrs(kind.as_deref(), delay.as_deref()))
    }
}
